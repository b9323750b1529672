//! Built-in keyword tables and identifier patterns.

/// Part numbers: the `PS` prefix followed by at least six digits.
pub const PART_NUMBER_PATTERN: &str = r"PS\d{6,}";

/// Manufacturer model numbers such as `WDT780SAEM1` or `WRS325FDAM04`.
pub const MODEL_NUMBER_PATTERN: &str = r"\b[A-Z]{1,3}\d{3,4}[A-Z]{0,4}\d+[A-Z]?\d*\b";

/// Manufacturer SKUs such as `W10321304`. Validated and exposed, not scored.
pub const SKU_PATTERN: &str = r"\b[A-Z]{1,2}\d{6,10}\b";

pub const IN_SCOPE_KEYWORDS: &[&str] = &[
    "refrigerator",
    "fridge",
    "freezer",
    "dishwasher",
    "ice maker",
    "water filter",
    "appliance",
    "part",
    "parts",
    "part number",
    "model",
    "model number",
    "replacement",
    "replace",
    "install",
    "installation",
    "compatible",
    "compatibility",
    "repair",
    "fix",
    "broken",
    "not working",
    "leak",
    "leaking",
    "noise",
    "troubleshoot",
    "door",
    "shelf",
    "drawer",
    "gasket",
    "seal",
    "rack",
    "spray arm",
    "pump",
    "motor",
    "valve",
    "thermostat",
    "hinge",
    "handle",
    "filter",
    "order",
    "shipping",
    "warranty",
];

pub const OUT_OF_SCOPE_KEYWORDS: &[&str] = &[
    "weather",
    "joke",
    "movie",
    "music",
    "song",
    "sports",
    "game",
    "politics",
    "election",
    "news",
    "recipe",
    "cooking",
    "travel",
    "flight",
    "hotel",
    "stock market",
    "crypto",
    "bitcoin",
    "homework",
    "poem",
    "story",
    "vehicle",
    "phone",
    "laptop",
    "computer",
    "washing machine",
    "dryer",
    "oven",
    "microwave",
    "stove",
    "air conditioner",
    "vacuum",
    "television",
];

pub const PRODUCT_SEARCH_TRIGGERS: &[&str] = &[
    "find",
    "search",
    "looking for",
    "need",
    "part",
    "parts",
    "part number",
    "replacement",
    "buy",
    "purchase",
    "price",
    "cost",
    "available",
    "in stock",
    "where can i",
];

pub const COMPATIBILITY_CHECK_TRIGGERS: &[&str] = &[
    "compatible",
    "compatibility",
    "fit",
    "fits",
    "work with",
    "works with",
    "model",
    "model number",
    "match",
    "same as",
];

pub const INSTALLATION_GUIDE_TRIGGERS: &[&str] = &[
    "install",
    "installation",
    "installing",
    "how do i",
    "how to",
    "replace",
    "replacing",
    "remove",
    "instructions",
    "steps",
    "guide",
    "setup",
    "put in",
    "video",
];

pub const TROUBLESHOOTING_TRIGGERS: &[&str] = &[
    "not working",
    "broken",
    "fix",
    "repair",
    "problem",
    "issue",
    "leak",
    "leaking",
    "noise",
    "noisy",
    "troubleshoot",
    "won't",
    "doesn't",
    "stopped",
    "error",
];

pub const ORDER_SUPPORT_TRIGGERS: &[&str] = &[
    "order",
    "orders",
    "shipping",
    "delivery",
    "track",
    "tracking",
    "return",
    "refund",
    "cancel",
    "status",
    "warranty",
    "checkout",
    "cart",
];

pub(crate) fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|&s| s.to_string()).collect()
}
