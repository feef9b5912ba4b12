//! Conversion of source rows into Bolt maps for `UNWIND $rows`.
//!
//! Dates and timestamps travel as ISO-8601 strings and are parsed by the
//! Cypher `date()` / `datetime()` functions on the server. Missing values
//! become Bolt nulls.

use chrono::{DateTime, NaiveDate, Utc};
use neo4rs::{BoltMap, BoltNull, BoltString, BoltType};
use shopgraph_db::{CategoryRow, CustomerRow, EventRow, OrderItemRow, OrderRow, ProductRow};

/// A source row that can be sent as one element of `$rows`.
pub trait ToBoltRow {
    fn to_bolt_row(&self) -> BoltMap;
}

fn opt<T: Into<BoltType>>(value: Option<T>) -> BoltType {
    value.map(Into::into).unwrap_or(BoltType::Null(BoltNull))
}

fn date(value: Option<NaiveDate>) -> BoltType {
    opt(value.map(|d| d.format("%Y-%m-%d").to_string()))
}

fn timestamp(value: Option<DateTime<Utc>>) -> BoltType {
    opt(value.map(|ts| ts.to_rfc3339()))
}

fn row<const N: usize>(fields: [(&str, BoltType); N]) -> BoltMap {
    let mut map = BoltMap::with_capacity(N);
    for (key, value) in fields {
        map.put(BoltString::from(key), value);
    }
    map
}

impl ToBoltRow for CategoryRow {
    fn to_bolt_row(&self) -> BoltMap {
        row([
            ("id", self.id.as_str().into()),
            ("name", opt(self.name.as_deref())),
        ])
    }
}

impl ToBoltRow for ProductRow {
    fn to_bolt_row(&self) -> BoltMap {
        row([
            ("id", self.id.as_str().into()),
            ("name", opt(self.name.as_deref())),
            ("price", opt(self.price)),
            ("category_id", opt(self.category_id.as_deref())),
        ])
    }
}

impl ToBoltRow for CustomerRow {
    fn to_bolt_row(&self) -> BoltMap {
        row([
            ("id", self.id.as_str().into()),
            ("name", opt(self.name.as_deref())),
            ("join_date", date(self.join_date)),
        ])
    }
}

impl ToBoltRow for OrderRow {
    fn to_bolt_row(&self) -> BoltMap {
        row([
            ("id", self.id.as_str().into()),
            ("customer_id", opt(self.customer_id.as_deref())),
            ("ts", timestamp(self.ts)),
        ])
    }
}

impl ToBoltRow for OrderItemRow {
    fn to_bolt_row(&self) -> BoltMap {
        row([
            ("order_id", opt(self.order_id.as_deref())),
            ("product_id", opt(self.product_id.as_deref())),
            ("quantity", opt(self.quantity)),
        ])
    }
}

impl ToBoltRow for EventRow {
    fn to_bolt_row(&self) -> BoltMap {
        row([
            ("id", self.id.as_str().into()),
            ("customer_id", opt(self.customer_id.as_deref())),
            ("product_id", opt(self.product_id.as_deref())),
            ("event_type", opt(self.event_type.as_deref())),
            ("ts", timestamp(self.ts)),
        ])
    }
}

/// Convert a table into Bolt rows.
pub fn to_bolt_rows<R: ToBoltRow>(rows: &[R]) -> Vec<BoltMap> {
    rows.iter().map(ToBoltRow::to_bolt_row).collect()
}
