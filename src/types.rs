/// Listing URL exactly as it appears in the input file.
/// Example: `https://rv.example/listing/1234`
pub type ListingUrl = String;
/// Class label attached to a listing by the second input field.
/// Examples: `Class_A`, `Towable`, `Part`
pub type ClassLabel = String;
/// Price rendered as a plain decimal numeral, or `?` when none was found.
/// Examples: `8500`, `?`
pub type PriceText = String;
/// Multi-word phrase from the n-gram dictionary.
/// Example: `holiday rambler`
pub type Phrase = String;
/// Single word left in a listing body after extraction and filtering.
/// Example: `motorhome`
pub type Token = String;
/// Vocabulary entry: a token or a phrase, counted in one shared namespace.
/// Examples: `sleeps`, `holiday rambler`
pub type Term = String;
