use crate::models::{ResultSet, Triple};

/// Group triples by model; within a model, later triples for the same
/// field overwrite earlier ones (a later table refines an earlier summary
/// field, and processing order matches document order). Models with no
/// surviving triples never appear in the result.
pub fn aggregate(triples: Vec<Triple>) -> ResultSet {
    let mut result = ResultSet::new();
    for triple in triples {
        if triple.model.is_empty() {
            continue;
        }
        result
            .entry(triple.model)
            .or_default()
            .insert(triple.field, triple.value);
    }
    result
}
