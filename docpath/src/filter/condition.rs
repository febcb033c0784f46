use crate::collection::{Document, FieldPath};
use crate::common::{Value, DEFAULT_FIELD_SEPARATOR};
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use std::fmt::Display;
use std::str::FromStr;

/// Comparison and membership operators of a [QueryCondition].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    ArrayContains,
    ArrayContainsAny,
    In,
    NotIn,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "==",
            FilterOperator::NotEqual => "!=",
            FilterOperator::LessThan => "<",
            FilterOperator::LessThanOrEqual => "<=",
            FilterOperator::GreaterThan => ">",
            FilterOperator::GreaterThanOrEqual => ">=",
            FilterOperator::ArrayContains => "array-contains",
            FilterOperator::ArrayContainsAny => "array-contains-any",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not-in",
        }
    }

    /// Operators whose operand must be an array of candidates.
    pub fn takes_array(&self) -> bool {
        matches!(
            self,
            FilterOperator::ArrayContainsAny | FilterOperator::In | FilterOperator::NotIn
        )
    }
}

impl Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = DocPathError;

    fn from_str(s: &str) -> DocPathResult<Self> {
        match s.trim() {
            "==" => Ok(FilterOperator::Equal),
            "!=" => Ok(FilterOperator::NotEqual),
            "<" => Ok(FilterOperator::LessThan),
            "<=" => Ok(FilterOperator::LessThanOrEqual),
            ">" => Ok(FilterOperator::GreaterThan),
            ">=" => Ok(FilterOperator::GreaterThanOrEqual),
            "array-contains" => Ok(FilterOperator::ArrayContains),
            "array-contains-any" => Ok(FilterOperator::ArrayContainsAny),
            "in" => Ok(FilterOperator::In),
            "not-in" => Ok(FilterOperator::NotIn),
            other => {
                log::error!("Unknown filter operator {}", other);
                Err(DocPathError::new(
                    &format!("Unknown filter operator '{}'", other),
                    ErrorKind::InvalidOperation,
                ))
            }
        }
    }
}

/// A `(field, operator, value)` filter. Conditions of a query are ANDed.
///
/// The field name addresses nested values with `.` (`"address.city"`).
///
/// ```rust
/// use docpath::filter::{FilterOperator, QueryCondition};
///
/// let adults = QueryCondition::parse("age", ">=", 18).unwrap();
/// assert_eq!(adults.operator, FilterOperator::GreaterThanOrEqual);
/// assert_eq!(adults.to_string(), "age >= 18");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: Value,
}

impl QueryCondition {
    pub fn new<T: Into<Value>>(field: &str, operator: FilterOperator, value: T) -> Self {
        QueryCondition {
            field: field.to_string(),
            operator,
            value: value.into(),
        }
    }

    /// Builds a condition from a textual operator such as `">="` or `"in"`.
    pub fn parse<T: Into<Value>>(field: &str, operator: &str, value: T) -> DocPathResult<Self> {
        Ok(QueryCondition::new(field, operator.parse()?, value))
    }

    /// Checks that the field name parses and that array operators got an
    /// array operand.
    pub fn validate(&self) -> DocPathResult<()> {
        FieldPath::parse(&self.field, DEFAULT_FIELD_SEPARATOR)?;
        if self.operator.takes_array() && !self.value.is_array() {
            log::error!("Operator {} requires an array operand, got {}", self.operator, self.value);
            return Err(DocPathError::new(
                &format!("Operator '{}' requires an array value", self.operator),
                ErrorKind::InvalidOperation,
            ));
        }
        Ok(())
    }

    /// Evaluates the condition against a document. A document without the
    /// field never matches, whatever the operator.
    pub fn matches(&self, doc: &Document) -> bool {
        let Ok(path) = FieldPath::parse(&self.field, DEFAULT_FIELD_SEPARATOR) else {
            return false;
        };
        let Some(actual) = doc.get_path(&path) else {
            return false;
        };
        if actual.is_absent() {
            return false;
        }

        match self.operator {
            FilterOperator::Equal => actual == &self.value,
            FilterOperator::NotEqual => actual != &self.value,
            // range comparisons only match values of the same type class
            FilterOperator::LessThan => same_class(actual, &self.value) && actual < &self.value,
            FilterOperator::LessThanOrEqual => same_class(actual, &self.value) && actual <= &self.value,
            FilterOperator::GreaterThan => same_class(actual, &self.value) && actual > &self.value,
            FilterOperator::GreaterThanOrEqual => same_class(actual, &self.value) && actual >= &self.value,
            FilterOperator::ArrayContains => actual
                .as_array()
                .is_some_and(|items| items.contains(&self.value)),
            FilterOperator::ArrayContainsAny => match (actual.as_array(), self.value.as_array()) {
                (Some(items), Some(candidates)) => candidates.iter().any(|c| items.contains(c)),
                _ => false,
            },
            FilterOperator::In => self
                .value
                .as_array()
                .is_some_and(|candidates| candidates.contains(actual)),
            FilterOperator::NotIn => self
                .value
                .as_array()
                .is_some_and(|candidates| !candidates.contains(actual)),
        }
    }
}

fn same_class(left: &Value, right: &Value) -> bool {
    left.type_rank() == right.type_rank()
}

impl Display for QueryCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}
