/// Constants controlling default pipeline configuration.
pub mod defaults {
    /// Default destination for the vocabulary/record summary.
    pub const OUTPUT_FILE: &str = "output.txt";
    /// Default cap on the number of ranked terms carried into outputs.
    pub const VOCAB_LIMIT: usize = 300;
}

/// Constants describing the summary file layout.
pub mod summary {
    /// Line separating the summary's header, vocabulary, and record sections.
    pub const SECTION_DELIMITER: &str = "-----";
    /// Key carried in the `wordcount=<K>` header line.
    pub const WORDCOUNT_KEY: &str = "wordcount";
    /// Separator between serialized record fields.
    pub const FIELD_SEPARATOR: &str = ", ";
}

/// Constants shared by record preprocessing.
pub mod listing {
    /// Sentinel written when no price could be extracted from a listing.
    pub const PRICE_UNKNOWN: &str = "?";
}

/// Constants describing the ARFF header and feature encoding.
pub mod arff {
    /// Relation name emitted in the `@RELATION` line.
    pub const RELATION: &str = "rvs";
    /// Attribute name for the numeric price feature.
    pub const PRICE_ATTRIBUTE: &str = "price";
    /// Attribute name for the nominal class feature.
    pub const CLASS_ATTRIBUTE: &str = "class";
    /// Nominal value marking a term as present in a record.
    pub const TERM_PRESENT: &str = "y";
    /// Nominal value marking a term as absent from a record.
    pub const TERM_ABSENT: &str = "n";
    /// Fixed class label set, in declaration order.
    pub const CLASS_LABELS: [&str; 6] = [
        "Class_A", "Class_B", "CLASS_C", "Towable", "Part", "Other",
    ];
}
