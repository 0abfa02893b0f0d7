use shared::{domain::Bucket, protocol::Predicate};

/// Builds the filter predicate selecting the features of one bucket.
///
/// Rules apply in order:
/// 1. open-low bucket: `<field> < <max>`
/// 2. `min > 0` and `max == 0`: `<field> >= <min>`
/// 3. otherwise: `<field> > <min> AND <field> <= <max>`
///
/// Rule 2 cannot fire for a bucket that passed scheme validation (its range
/// would be inverted). It is kept so hand-built buckets produce the same
/// predicates the legend always has.
// TODO: confirm whether rule 2 was meant to express an unbounded "n or more" class.
pub fn build_predicate(field: &str, bucket: &Bucket) -> Predicate {
    let max_value = bucket.max_value;
    let expression = match bucket.min_value {
        None => format!("{field} < {max_value}"),
        Some(min_value) if min_value > 0 && max_value == 0 => {
            format!("{field} >= {min_value}")
        }
        Some(min_value) => {
            format!("{field} > {min_value} AND {field} <= {max_value}")
        }
    };
    Predicate::new(expression)
}

#[cfg(test)]
#[path = "tests/predicate_tests.rs"]
mod tests;
