//! Third-party catalog source.
//!
//! The third-party schema is not under our control, so entries are read as
//! loose JSON and remapped field by field. Anything that fails to parse is
//! defaulted rather than passed inward.

use crate::source::BookSource;
use crate::SourceError;
use async_trait::async_trait;
use serde_json::Value;
use shelf_commerce::{Book, BookId, Currency, Money};
use shelf_data::FetchClient;

/// Category assigned to every third-party book.
pub const EXTERNAL_CATEGORY: &str = "Technology";

/// Author used when an entry has no subtitle.
const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Stock assigned to every third-party book.
const EXTERNAL_STOCK: i64 = 20;

/// Default first id of the reserved third-party range.
pub const DEFAULT_ID_BASE: i64 = 1000;

/// Default cap on third-party entries.
pub const DEFAULT_LIMIT: usize = 12;

/// Default conversion from the third-party currency to rupees.
pub const DEFAULT_EXCHANGE_RATE: f64 = 80.0;

/// Fetches a third-party "new books" list and remaps it.
#[derive(Debug, Clone)]
pub struct ExternalSource {
    client: FetchClient,
    url: String,
    options: RemapOptions,
}

/// How third-party entries become books.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemapOptions {
    /// Id given to the first entry; later entries count up from here.
    pub id_base: i64,
    /// Maximum number of entries taken.
    pub limit: usize,
    /// Multiplier from the third-party price to rupees.
    pub exchange_rate: f64,
}

impl Default for RemapOptions {
    fn default() -> Self {
        Self {
            id_base: DEFAULT_ID_BASE,
            limit: DEFAULT_LIMIT,
            exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }
}

impl ExternalSource {
    /// Create a source reading `url` with default remap options.
    pub fn new(client: FetchClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            options: RemapOptions::default(),
        }
    }

    /// Override the remap options.
    pub fn with_options(mut self, options: RemapOptions) -> Self {
        self.options = options;
        self
    }
}

#[async_trait]
impl BookSource for ExternalSource {
    fn name(&self) -> &str {
        "external"
    }

    async fn fetch(&self) -> Result<Vec<Book>, SourceError> {
        let body: Value = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()?;

        Ok(remap_external(&body, &self.options))
    }
}

/// Remap a third-party response body into books.
///
/// Only the first `limit` entries of `books` are considered and the entry at
/// position `i` gets id `id_base + i`. Entries that are not objects are
/// skipped but still use up their id. A body without a `books` array yields
/// nothing.
pub fn remap_external(body: &Value, options: &RemapOptions) -> Vec<Book> {
    let Some(entries) = body.get("books").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .take(options.limit)
        .enumerate()
        .filter_map(|(index, entry)| {
            let entry = entry.as_object()?;
            let text = |key: &str| entry.get(key).and_then(Value::as_str).unwrap_or("");

            let subtitle = text("subtitle");
            let author = if subtitle.is_empty() {
                UNKNOWN_AUTHOR
            } else {
                subtitle
            };
            let amount = match entry.get("price") {
                Some(Value::String(s)) => parse_price(s),
                Some(Value::Number(n)) => n.as_f64().filter(|v| *v >= 0.0).unwrap_or(0.0),
                _ => 0.0,
            };

            let id = i64::try_from(index)
                .ok()
                .and_then(|offset| BookId::new(options.id_base).checked_offset(offset))?;

            Some(
                Book::builder(id, text("title"))
                    .author(author)
                    .category(EXTERNAL_CATEGORY)
                    .price(Money::from_decimal(
                        amount * options.exchange_rate,
                        Currency::INR,
                    ))
                    .description(subtitle)
                    .image_url(text("image"))
                    .stock(EXTERNAL_STOCK)
                    .build(),
            )
        })
        .collect()
}

/// Currency symbols allowed before a third-party price.
const PRICE_SYMBOLS: [char; 5] = ['$', '\u{20b9}', '\u{20ac}', '\u{a3}', '\u{a5}'];

/// Parse a price such as `"$32.04"` into its numeric value.
///
/// Leading whitespace and currency symbols are skipped and the longest
/// decimal prefix is read, so `"$1,234.00"` parses as `1.0`. Any other
/// leading text, or a negative value, gives `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    let rest =
        raw.trim_start_matches(|c: char| c.is_whitespace() || PRICE_SYMBOLS.contains(&c));

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in rest.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }
    rest[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}
