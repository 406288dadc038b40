/// Name of a preprocessing trigger category.
/// Examples: `contractions`, `numbers`, `punctuation`, `urls`
pub type CategoryName = String;
/// Regular expression source for a trigger category.
/// Example: `\d+`
pub type PatternSource = String;
/// A single stemmed term as it appears in the final token column.
/// Examples: `anxieti`, `feel`, `num`
pub type Term = String;
/// Column name in the input dataset header.
/// Examples: `original_selftext`, `tokens_stemmed`
pub type ColumnName = String;
/// Display form of a filesystem path used in error reports.
/// Example: `data/anxiety_preprocessed.csv`
pub type PathString = String;
