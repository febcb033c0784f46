use crate::common::Value;
use crate::filter::{FilterOperator, QueryCondition};

/// Starts a fluent condition on `field_name`.
///
/// ```rust
/// use docpath::filter::field;
///
/// let condition = field("age").gte(18);
/// assert_eq!(condition.to_string(), "age >= 18");
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// Builder returned by [field]; each method yields a [QueryCondition].
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> QueryCondition {
        self.condition(FilterOperator::Equal, value)
    }

    #[inline]
    pub fn ne<T: Into<Value>>(self, value: T) -> QueryCondition {
        self.condition(FilterOperator::NotEqual, value)
    }

    #[inline]
    pub fn gt<T: Into<Value>>(self, value: T) -> QueryCondition {
        self.condition(FilterOperator::GreaterThan, value)
    }

    #[inline]
    pub fn gte<T: Into<Value>>(self, value: T) -> QueryCondition {
        self.condition(FilterOperator::GreaterThanOrEqual, value)
    }

    #[inline]
    pub fn lt<T: Into<Value>>(self, value: T) -> QueryCondition {
        self.condition(FilterOperator::LessThan, value)
    }

    #[inline]
    pub fn lte<T: Into<Value>>(self, value: T) -> QueryCondition {
        self.condition(FilterOperator::LessThanOrEqual, value)
    }

    /// Matches documents whose array field contains `value`.
    #[inline]
    pub fn array_contains<T: Into<Value>>(self, value: T) -> QueryCondition {
        self.condition(FilterOperator::ArrayContains, value)
    }

    /// Matches documents whose array field contains any of `values`.
    #[inline]
    pub fn array_contains_any<T: Into<Value>>(self, values: Vec<T>) -> QueryCondition {
        self.condition(FilterOperator::ArrayContainsAny, Value::from_vec(values))
    }

    /// Matches documents whose field equals one of `values`.
    #[inline]
    pub fn in_array<T: Into<Value>>(self, values: Vec<T>) -> QueryCondition {
        self.condition(FilterOperator::In, Value::from_vec(values))
    }

    /// Matches documents whose field exists and equals none of `values`.
    #[inline]
    pub fn not_in_array<T: Into<Value>>(self, values: Vec<T>) -> QueryCondition {
        self.condition(FilterOperator::NotIn, Value::from_vec(values))
    }

    fn condition<T: Into<Value>>(self, operator: FilterOperator, value: T) -> QueryCondition {
        QueryCondition {
            field: self.field_name,
            operator,
            value: value.into(),
        }
    }
}
