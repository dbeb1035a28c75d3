// src/data.rs
//
// Row shapes produced by the scrapers, and DataSet: the printable,
// header-plus-cells form every row shape flattens into.

use crate::core::links::Link;

/// One extracted record with a fixed column layout.
pub trait Row {
    const HEADERS: &'static [&'static str];

    /// Cells in header order.
    fn fields(&self) -> Vec<String>;
}

/// One "What's New" document: its page, `<h1>` and `<dl>` text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatsNewRow {
    pub link: Link,
    pub heading: String,
    pub body: String,
}

impl Row for WhatsNewRow {
    const HEADERS: &'static [&'static str] = &["Link", "Title", "Editor / Author"];

    fn fields(&self) -> Vec<String> {
        vec![s!(self.link.as_str()), self.heading.clone(), self.body.clone()]
    }
}

/// One sidebar entry. `status` is empty when the label didn't parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionRow {
    pub link: Link,
    pub version: String,
    pub status: String,
}

impl Row for VersionRow {
    const HEADERS: &'static [&'static str] = &["Link", "Version", "Status"];

    fn fields(&self) -> Vec<String> {
        vec![s!(self.link.as_str()), self.version.clone(), self.status.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_rows<R: Row>(rows: &[R]) -> Self {
        Self {
            headers: R::HEADERS.iter().map(|h| s!(*h)).collect(),
            rows: rows.iter().map(R::fields).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn dataset_keeps_row_order_and_duplicates() {
        let link = Link::from(Url::parse("https://docs.python.org/3.9/").unwrap());
        let row = VersionRow { link, version: s!("3.9"), status: s!("stable") };
        let ds = DataSet::from_rows(&[row.clone(), row]);
        assert_eq!(ds.headers, vec!["Link", "Version", "Status"]);
        assert_eq!(ds.rows.len(), 2);
        assert_eq!(ds.rows[0], ds.rows[1]);
        assert_eq!(ds.rows[0][0], "https://docs.python.org/3.9/");
    }
}
