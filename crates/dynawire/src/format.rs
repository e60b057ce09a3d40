//! Request formatting: plain items and conditions to wire bodies.
//!
//! Pure transformation, no I/O. Two independent entry points share the type
//! inference in [`crate::value`]: [`format_item`] for write bodies and
//! [`format_conditions`] for query conditions.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result};
use crate::operator::ComparisonOperator;
use crate::request::{FormattedItem, KeyCondition};
use crate::value::WireValue;

/// What to do with an attribute whose value type has no wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Drop the attribute from the formatted item and log a warning.
    #[default]
    Skip,
    /// Fail the whole item with [`Error::UnsupportedAttribute`].
    Fail,
}

/// Format a plain item into its wire body.
///
/// Each attribute value is wire-tagged and stringified. Attributes whose type
/// has no wire tag are handled per `policy`: dropped with a warning, or a
/// hard error.
pub fn format_item(item: &Map<String, Value>, policy: UnsupportedPolicy) -> Result<FormattedItem> {
    let mut formatted = FormattedItem::new();
    for (name, value) in item {
        match WireValue::from_value(value) {
            Some(wire) => {
                formatted.insert(name.clone(), wire);
            }
            None => match policy {
                UnsupportedPolicy::Skip => {
                    warn!(attribute = %name, "dropping attribute with unsupported type");
                }
                UnsupportedPolicy::Fail => {
                    return Err(Error::UnsupportedAttribute { name: name.clone() });
                }
            },
        }
    }
    Ok(formatted)
}

/// Format plain conditions into wire key conditions.
///
/// Each condition key is `"<attribute> <symbol>"`; the value is either a
/// scalar (a single bound) or an array (one bound per element, required for
/// the `~` BETWEEN operator). Unlike write formatting there is no drop
/// policy: a bound with an unsupported type is always an error, since a
/// silently-altered condition would return wrong results.
pub fn format_conditions(conditions: &Map<String, Value>) -> Result<BTreeMap<String, KeyCondition>> {
    let mut formatted = BTreeMap::new();
    for (key, value) in conditions {
        let (name, symbol) = parse_condition_key(key)?;
        let operator = ComparisonOperator::from_symbol(symbol);

        let bounds: Vec<&Value> = match value {
            Value::Array(values) => values.iter().collect(),
            scalar => vec![scalar],
        };
        if operator == ComparisonOperator::Between && bounds.len() != 2 {
            return Err(Error::BetweenBounds {
                name: name.to_string(),
                got: bounds.len(),
            });
        }

        let mut attribute_value_list = Vec::with_capacity(bounds.len());
        for bound in bounds {
            let wire = WireValue::from_value(bound).ok_or_else(|| Error::UnsupportedAttribute {
                name: name.to_string(),
            })?;
            attribute_value_list.push(wire);
        }

        formatted.insert(
            name.to_string(),
            KeyCondition {
                comparison_operator: operator,
                attribute_value_list,
            },
        );
    }
    Ok(formatted)
}

/// Split a condition key into attribute name and operator symbol.
///
/// The key must contain exactly two whitespace-separated tokens.
fn parse_condition_key(key: &str) -> Result<(&str, &str)> {
    let mut tokens = key.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(name), Some(symbol), None) => Ok((name, symbol)),
        _ => Err(Error::MalformedConditionKey {
            key: key.to_string(),
        }),
    }
}
