use crate::core::errors::ExchangeError;
use std::collections::BTreeMap;

/// A value that can appear in a query string
///
/// Integers render as plain base-10 with no separators or exponent.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

macro_rules! impl_query_value_display {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_query_value_display!(i32, i64, u16, u32, u64, usize, bool);

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// Ordered mapping of wire field name to string value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) {
        self.params.insert(key.to_string(), value.to_query_value());
    }

    /// Insert only when the value is present
    pub fn insert_opt<V: QueryValue + ?Sized>(&mut self, key: &str, value: Option<&V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn with<V: QueryValue + ?Sized>(mut self, key: &str, value: &V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encoded `k=v&k=v` form, without the leading '?'
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Explicit mapping from a parameter struct to its query parameters
pub trait ToQuery {
    fn to_query(&self) -> Result<QueryParams, ExchangeError>;
}

impl ToQuery for () {
    fn to_query(&self) -> Result<QueryParams, ExchangeError> {
        Ok(QueryParams::new())
    }
}

impl<T: ToQuery> ToQuery for Option<T> {
    fn to_query(&self) -> Result<QueryParams, ExchangeError> {
        self.as_ref()
            .map_or_else(|| Ok(QueryParams::new()), |params| params.to_query())
    }
}
