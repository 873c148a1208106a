//! The fixed corpus every generated text is drawn from.

/// Number of words in [`WORD_POOL`].
pub const WORD_POOL_SIZE: usize = 131;

/// Lowercase filler words (meat and lorem ipsum), unique and trimmed.
pub const WORD_POOL: [&str; WORD_POOL_SIZE] = [
    "lorem", "capicola", "tenderloin", "sunt", "elit", "turducken", "sirloin", "eu", "ut",
    "pork", "chop", "est", "nisi", "cupim", "in", "culpa", "adipisicing", "beef", "incididunt",
    "id", "buffalo", "ea", "spare", "ribs", "t-bone", "meatball", "proident", "tail", "aute",
    "dolore", "tempor", "ipsum", "consectetur", "frankfurter", "exercitation", "voluptate",
    "esse", "porchetta", "ground", "round", "dolor", "excepteur", "quis", "cupidatat",
    "prosciutto", "aliqua", "leberkas", "meatloaf", "fugiat", "ball", "tip", "kevin", "duis",
    "nulla", "magna", "jerky", "qui", "deserunt", "sint", "sed", "turkey", "andouille",
    "officia", "anim", "sausage", "do", "reprehenderit", "rump", "filet", "mignon", "veniam",
    "et", "pig", "venison", "ad", "eiusmod", "flank", "doner", "labore", "minim", "non",
    "kielbasa", "chuck", "laboris", "commodo", "mollit", "ex", "occaecat", "swine", "biltong",
    "ham", "hock", "pariatur", "cillum", "belly", "salami", "velit", "laborum", "pancetta",
    "shank", "strip", "steak", "drumstick", "tri-tip", "short", "bacon", "ullamco", "jowl",
    "enim", "brisket", "burgdoggen", "picanha", "cow", "alcatra", "shankle", "loin", "tongue",
    "aliquip", "nostrud", "bresaola", "consequat", "boudin", "landjaeger", "fatback", "corned",
    "pastrami", "chicken", "ribeye", "irure", "hamburger", "shoulder",
];

/// Check whether a token belongs to the word pool.
pub fn is_pool_word(token: &str) -> bool {
    WORD_POOL.contains(&token)
}
