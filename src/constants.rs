/// Default dataset column names.
pub mod columns {
    /// Free-text body of the original post.
    pub const ORIGINAL_TEXT: &str = "original_selftext";
    /// Title of the original post (optional column).
    pub const ORIGINAL_TITLE: &str = "original_title";
    /// Fully processed text.
    pub const PROCESSED_TEXT: &str = "processed_text";
    /// Whitespace-joined tokens from the final (stemmed) stage.
    pub const STEMMED_TOKENS: &str = "tokens_stemmed";
    /// Default field delimiter.
    pub const DELIMITER: u8 = b',';
}

/// Trigger category names and their default detection patterns.
pub mod triggers {
    /// Category for contractions such as `don't` or `I'm`.
    pub const CONTRACTIONS: &str = "contractions";
    /// Category for digit sequences.
    pub const NUMBERS: &str = "numbers";
    /// Category for runs of two or more punctuation marks.
    pub const PUNCTUATION: &str = "punctuation";
    /// Category for web links and e-mail addresses.
    pub const URLS: &str = "urls";

    /// Word followed by an apostrophe and a common contraction suffix.
    pub const CONTRACTIONS_PATTERN: &str = r"(?i)\b[a-z]+['’](?:s|t|re|ve|ll|d|m)\b";
    /// Any run of ASCII digits.
    pub const NUMBERS_PATTERN: &str = r"\d+";
    /// Two or more consecutive sentence punctuation marks (`!!`, `?!`, `...`).
    pub const PUNCTUATION_PATTERN: &str = r"[!?.,;:]{2,}";
    /// `http(s)://` or `www.` links, or an e-mail address.
    pub const URLS_PATTERN: &str =
        r"(?i)(?:https?://\S+|\bwww\.\S+|\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b)";
}

/// Defaults for term-frequency tables.
pub mod frequency {
    /// Number of entries kept in the top-terms table.
    pub const DEFAULT_TOP_N: usize = 15;
}

/// Names and media types of downloadable artifacts.
pub mod download {
    /// Fixed file name under which the input dataset is offered.
    pub const DATASET_FILE_NAME: &str = "anxiety_preprocessed.csv";
    /// Media type of the dataset artifact.
    pub const DATASET_MIME: &str = "text/csv";
    /// Fixed file name of the rendered summary report.
    pub const REPORT_FILE_NAME: &str = "preprocessing_report.txt";
    /// Media type of the report artifact.
    pub const REPORT_MIME: &str = "text/plain";
}

/// Default locations.
pub mod paths {
    /// Dataset path used when no configuration overrides it.
    pub const DEFAULT_DATASET_PATH: &str = "data/anxiety_preprocessed.csv";
}
