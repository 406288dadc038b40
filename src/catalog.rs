//! Static report content for the r/Anxiety preprocessing dataset.
//!
//! Everything here was produced by the preprocessing run itself and is shown
//! as-is; none of it is recomputed from the loaded dataset. Live figures come
//! from [`crate::metrics::CorpusMetrics`].

/// Descriptive facts about the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetFacts {
    pub title: &'static str,
    pub course: &'static str,
    pub subreddit: &'static str,
    pub date_range: &'static str,
    pub description: &'static str,
    pub objectives: &'static [&'static str],
}

/// One step of the preprocessing pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreprocessingStep {
    pub name: &'static str,
    pub purpose: &'static str,
    pub example: &'static str,
    pub impact: &'static str,
}

/// A before/after text pair taken from the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExamplePair {
    pub title: &'static str,
    pub original: &'static str,
    pub processed: &'static str,
}

/// Why a given step was needed for this corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requirement {
    pub name: &'static str,
    pub reason: &'static str,
    pub example: &'static str,
    pub frequency: &'static str,
}

/// A headline figure published with the report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PublishedFigure {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

/// Dataset description shown on the overview.
pub const DATASET: DatasetFacts = DatasetFacts {
    title: "Text Preprocessing Report - Anxiety Dataset",
    course: "MSDS NLP 2025 - Text Preprocessing Assignment",
    subreddit: "r/Anxiety",
    date_range: "April 2019",
    description: "Reddit posts from the r/Anxiety subreddit collected during April 2019. \
                  The posts capture anxiety-related discussions and experiences shared by the community.",
    objectives: &[
        "Apply text preprocessing techniques to prepare the data for NLP tasks",
        "Identify specific cases where preprocessing is required",
        "Document the types of preprocessing applied and their impact",
    ],
};

/// The nine pipeline steps, in application order.
pub const STEPS: [PreprocessingStep; 9] = [
    PreprocessingStep {
        name: "Lowercasing",
        purpose: "Convert all text to lowercase for consistency",
        example: "I'm Having ANXIETY → i'm having anxiety",
        impact: "Ensures 'Anxiety' and 'anxiety' are treated as same word",
    },
    PreprocessingStep {
        name: "Contraction Expansion",
        purpose: "Expand contractions for better analysis",
        example: "don't → do not, it's → it is",
        impact: "Found in 47.2% of posts",
    },
    PreprocessingStep {
        name: "URL/Email Removal",
        purpose: "Remove web links and email addresses",
        example: "Check https://example.com → Check [URL]",
        impact: "Found in 1.8% of posts",
    },
    PreprocessingStep {
        name: "Number Normalization",
        purpose: "Replace numbers with placeholder token",
        example: "3 years ago → NUM years ago",
        impact: "Found in 46.7% of posts",
    },
    PreprocessingStep {
        name: "Punctuation Removal",
        purpose: "Remove excessive punctuation",
        example: "Help!!! → Help.",
        impact: "Found in 18.8% of posts",
    },
    PreprocessingStep {
        name: "Whitespace Normalization",
        purpose: "Remove extra spaces and newlines",
        example: "text    with    spaces → text with spaces",
        impact: "Ensures consistent spacing",
    },
    PreprocessingStep {
        name: "Tokenization",
        purpose: "Split text into individual words",
        example: "I have anxiety → ['I', 'have', 'anxiety']",
        impact: "Essential for word-level analysis",
    },
    PreprocessingStep {
        name: "Stopword Removal",
        purpose: "Remove common words with little meaning",
        example: "I have the anxiety → ['anxiety']",
        impact: "Reduced token count by 53.3%",
    },
    PreprocessingStep {
        name: "Stemming",
        purpose: "Reduce words to root form",
        example: "running, runs → run",
        impact: "Groups related words together",
    },
];

/// Before/after pairs illustrating the pipeline.
pub const EXAMPLES: [ExamplePair; 3] = [
    ExamplePair {
        title: "Contraction Expansion & Number Normalization",
        original: "I'm going to give my 2 months notice to my employer today. It's a great company, \
                   but it just isn't a fit and I'm miserable at my current position.",
        processed: "going give num month notice employer today great company fit miserable current position",
    },
    ExamplePair {
        title: "Stopword Removal & Stemming",
        original: "I got fired at my sidejob at a retail store, I had no previous experience with a retail job.",
        processed: "got fir sidejob retail store previous experience retail job",
    },
    ExamplePair {
        title: "Punctuation & Whitespace Normalization",
        original: "I always feels and act like I'm in a hurry even if I have literally nothing to do!!!",
        processed: "alway feel act like hurry even literal noth",
    },
];

/// Steps that this corpus specifically needed.
pub const REQUIREMENTS: [Requirement; 4] = [
    Requirement {
        name: "Contraction Expansion",
        reason: "Essential for standardizing text and proper tokenization",
        example: "don't → do not, it's → it is",
        frequency: "47.2% of posts",
    },
    Requirement {
        name: "Number Normalization",
        reason: "Important for generalization in pattern recognition",
        example: "3 years, 5 years → NUM years",
        frequency: "46.7% of posts",
    },
    Requirement {
        name: "URL Removal",
        reason: "Eliminates non-textual content that doesn't contribute to analysis",
        example: "https://example.com → [URL]",
        frequency: "1.8% of posts",
    },
    Requirement {
        name: "Stopword Removal",
        reason: "Focuses on meaningful content words",
        example: "I am very anxious → anxious",
        frequency: "Reduced tokens by 53.3%",
    },
];

/// Trigger rates reported by the preprocessing run, keyed like the default trigger categories.
pub const PUBLISHED_TRIGGER_RATES: [(&str, f64); 4] = [
    ("contractions", 47.2),
    ("numbers", 46.7),
    ("punctuation", 18.8),
    ("urls", 1.8),
];

/// Top-15 stemmed terms reported by the preprocessing run.
pub const PUBLISHED_TOP_TERMS: [(&str, usize); 15] = [
    ("anxiety", 1447),
    ("feel", 1367),
    ("like", 1182),
    ("num", 1009),
    ("get", 754),
    ("know", 678),
    ("real", 612),
    ("want", 553),
    ("time", 537),
    ("think", 500),
    ("work", 480),
    ("would", 477),
    ("thing", 460),
    ("day", 457),
    ("help", 433),
];

/// Headline reduction and vocabulary figures.
pub const PUBLISHED_FIGURES: [PublishedFigure; 3] = [
    PublishedFigure {
        label: "Token Reduction",
        value: "53.3%",
        delta: "-90.4 tokens/post",
    },
    PublishedFigure {
        label: "Text Length Reduction",
        value: "0.5%",
        delta: "-4.5 chars/post",
    },
    PublishedFigure {
        label: "Vocabulary Size",
        value: "~15,000 unique terms",
        delta: "after stemming",
    },
];

/// Published rate for `category`, if one was reported.
pub fn published_trigger_rate(category: &str) -> Option<f64> {
    PUBLISHED_TRIGGER_RATES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, rate)| *rate)
}
