use crate::error::{Error, Result};
use crate::huffman::{CodeTable, Symbol};

/// Encode `input` using the provided code table.
/// Each symbol is replaced with its Huffman code, in input order.
///
/// # Errors
///
/// Returns [`Error::MissingCode`] for the first symbol the table has no code for.
pub fn encode<S, I>(input: I, code_table: &CodeTable<S>) -> Result<String>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut encoded = String::new();
    for (position, symbol) in input.into_iter().enumerate() {
        let code = code_table
            .get(&symbol)
            .ok_or_else(|| Error::missing_code(&symbol, position))?;
        encoded.push_str(code);
    }
    Ok(encoded)
}
