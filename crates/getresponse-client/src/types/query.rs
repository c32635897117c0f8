/*
[INPUT]:  Search, sort, field-selection and paging options
[OUTPUT]: Bracketed GetResponse query strings (query[name]=x&sort[createdOn]=asc)
[POS]:    Data layer - query string construction for list endpoints
[UPDATE]: When GetResponse adds query parameters or changes bracket syntax
*/

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::http::{GetResponseError, Result};

use super::enums::SortOrder;

/// Characters left unescaped in query values. Commas separate `fields` and
/// id lists, `@` and `:` appear in emails and timestamps.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',')
    .remove(b'@')
    .remove(b':');

/// Characters left unescaped in query keys, so `query[createdOn][from]`
/// stays readable.
const QUERY_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'[')
    .remove(b']')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Characters a field name in a `field=value` expression may not contain.
const RESERVED_FIELD_CHARS: &[char] = &['&', '=', '#', '?'];

/// Ordered set of query parameters for GetResponse list endpoints.
///
/// Keys keep their bracket syntax; any other reserved character in a key and
/// every reserved character in a value is percent-encoded.
/// Parameters render in insertion order.
///
/// ```
/// use getresponse_client::{QueryParams, SortOrder};
///
/// let params = QueryParams::new()
///     .query("name", "newsletter")
///     .sort("createdOn", SortOrder::Desc)
///     .fields(["name", "createdOn"])
///     .per_page(100);
///
/// assert_eq!(
///     params.to_query_string(),
///     "query[name]=newsletter&sort[createdOn]=desc&fields=name,createdOn&perPage=100"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// `query[field]=value`
    pub fn query(self, field: &str, value: impl Into<String>) -> Self {
        self.param(format!("query[{field}]"), value)
    }

    /// `query[field][sub]=value`, e.g. `query[createdOn][from]=2017-01-01`
    pub fn query_nested(self, field: &str, sub: &str, value: impl Into<String>) -> Self {
        self.param(format!("query[{field}][{sub}]"), value)
    }

    /// Add a search condition written as `field=value`.
    ///
    /// The first `=` closes the bracket, so `createdOn][from]=2017-01-01`
    /// yields `query[createdOn][from]=2017-01-01`.
    pub fn query_expr(self, expr: &str) -> Result<Self> {
        let (field, value) = split_expr("query", expr)?;
        Ok(self.query(field, value))
    }

    /// `sort[field]=asc|desc`
    pub fn sort(self, field: &str, order: SortOrder) -> Self {
        self.param(format!("sort[{field}]"), order.as_str())
    }

    /// Add a sort condition written as `field=asc` or `field=desc`.
    pub fn sort_expr(self, expr: &str) -> Result<Self> {
        let (field, order) = split_expr("sort", expr)?;
        let order: SortOrder = order.parse()?;
        Ok(self.sort(field, order))
    }

    /// `fields=a,b,c`
    pub fn fields<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = fields
            .into_iter()
            .map(|f| f.as_ref().trim().to_string())
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        if joined.is_empty() {
            return self;
        }
        self.param("fields", joined)
    }

    pub fn page(self, page: u32) -> Self {
        self.param("page", page.to_string())
    }

    pub fn per_page(self, per_page: u32) -> Self {
        self.param("perPage", per_page.to_string())
    }

    /// `additionalFlags=flag`, e.g. `exactMatch`
    pub fn additional_flags(self, flag: &str) -> Self {
        self.param("additionalFlags", flag)
    }

    /// `query[groupBy]=value` for statistics endpoints (`hour`, `day`,
    /// `month`, `total`)
    pub fn group_by(self, value: &str) -> Self {
        self.query("groupBy", value)
    }

    /// Raw parameter; the key is emitted as given.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Append every parameter of `other` after the current ones.
    pub fn extend(mut self, other: &QueryParams) -> Self {
        self.pairs.extend(other.pairs.iter().cloned());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                utf8_percent_encode(key, QUERY_KEY_ENCODE_SET),
                utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET)
            )?;
        }
        Ok(())
    }
}

fn split_expr<'a>(kind: &str, expr: &'a str) -> Result<(&'a str, &'a str)> {
    let (field, value) = expr.split_once('=').ok_or_else(|| {
        GetResponseError::InvalidInput(format!(
            "{kind} expression '{expr}' must have the form field=value"
        ))
    })?;
    let field = field.trim();
    if field.is_empty() {
        return Err(GetResponseError::InvalidInput(format!(
            "{kind} expression '{expr}' has an empty field name"
        )));
    }
    if let Some(c) = field
        .chars()
        .find(|c| RESERVED_FIELD_CHARS.contains(c) || c.is_whitespace() || c.is_control())
    {
        return Err(GetResponseError::InvalidInput(format!(
            "{kind} expression '{expr}' has invalid character {c:?} in field name"
        )));
    }
    Ok((field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_params_render_nothing() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn test_campaign_contacts_query() {
        let params = QueryParams::new()
            .query_expr("email=com")
            .and_then(|p| p.query_expr("name=a"))
            .and_then(|p| p.sort_expr("email=asc"))
            .and_then(|p| p.sort_expr("createdOn=desc"))
            .unwrap()
            .fields(["name", "email", "campaigns", "createdOn"]);

        assert_eq!(
            params.to_query_string(),
            "query[email]=com&query[name]=a&sort[email]=asc&sort[createdOn]=desc\
             &fields=name,email,campaigns,createdOn"
        );
    }

    #[test]
    fn test_nested_expression_keeps_brackets() {
        let params = QueryParams::new()
            .group_by("month")
            .query_expr("createdOn][from]=2017-01-01")
            .unwrap();
        assert_eq!(
            params.to_query_string(),
            "query[groupBy]=month&query[createdOn][from]=2017-01-01"
        );
        assert_eq!(
            params,
            QueryParams::new()
                .group_by("month")
                .query_nested("createdOn", "from", "2017-01-01")
        );
    }

    #[rstest]
    #[case("a&b", "a%26b")]
    #[case("x=y", "x%3Dy")]
    #[case("two words", "two%20words")]
    #[case("jan@example.com", "jan@example.com")]
    #[case("Павел", "%D0%9F%D0%B0%D0%B2%D0%B5%D0%BB")]
    fn test_values_are_encoded(#[case] value: &str, #[case] expected: &str) {
        let params = QueryParams::new().query("name", value);
        assert_eq!(params.to_query_string(), format!("query[name]={expected}"));
    }

    #[rstest]
    #[case("no-equals-sign")]
    #[case("=value")]
    #[case("na#me=x")]
    #[case("a&perPage=1000=x")]
    #[case("na?me=x")]
    #[case("first name=x")]
    #[case("na\tme=x")]
    fn test_invalid_query_expression(#[case] expr: &str) {
        assert!(matches!(
            QueryParams::new().query_expr(expr),
            Err(GetResponseError::InvalidInput(_))
        ));
    }

    #[rstest]
    #[case("na#me=asc")]
    #[case("a&perPage=1000=asc")]
    fn test_invalid_sort_field(#[case] expr: &str) {
        assert!(matches!(
            QueryParams::new().sort_expr(expr),
            Err(GetResponseError::InvalidInput(_))
        ));
    }

    #[rstest]
    #[case("na#me", "query[na%23me]=x&page=2")]
    #[case("a&perPage", "query[a%26perPage]=x&page=2")]
    #[case("first name", "query[first%20name]=x&page=2")]
    #[case("createdOn][from", "query[createdOn][from]=x&page=2")]
    fn test_reserved_key_characters_are_encoded(#[case] field: &str, #[case] expected: &str) {
        let params = QueryParams::new().query(field, "x").page(2);
        assert_eq!(params.to_query_string(), expected);
    }

    #[test]
    fn test_sort_expression_rejects_unknown_order() {
        assert!(QueryParams::new().sort_expr("name=sideways").is_err());
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let params = QueryParams::new().fields(["", " "]).page(2);
        assert_eq!(params.to_query_string(), "page=2");
    }

    #[test]
    fn test_extend_appends_in_order() {
        let caller = QueryParams::new().additional_flags("exactMatch").per_page(10);
        let params = QueryParams::new().query("campaignId", "O").extend(&caller);
        assert_eq!(
            params.to_query_string(),
            "query[campaignId]=O&additionalFlags=exactMatch&perPage=10"
        );
        assert_eq!(params.pairs().len(), 3);
    }
}
