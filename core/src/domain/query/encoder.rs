use crate::domain::query::{
    entities::{condition_group::ConditionGroup, query_request::QueryRequest},
    keys::{self, COLLECTION_DELIMITER, condition, sort},
    value_objects::ConditionValue,
};

/// Flattens `request` into the key/value pairs the parser reads back.
///
/// Operators are written as integer codes and the root group operator is
/// always present. Two shapes do not survive the trip:
///
/// * a string element containing `~` inside a collection;
/// * a value whose raw form is blank (an empty or whitespace-only string,
///   an empty collection, a single blank element) and a blank search value.
///   They are written as blank pairs, which read back as absent.
pub fn encode_query_request(request: &QueryRequest) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if let Some(page) = request.page {
        pairs.push((keys::PAGE.to_string(), page.to_string()));
    }
    if let Some(page_size) = request.page_size {
        pairs.push((keys::PAGE_SIZE.to_string(), page_size.to_string()));
    }
    if let Some(search_value) = &request.search_value {
        pairs.push((keys::SEARCH.to_string(), search_value.clone()));
    }

    for (index, field) in request.sort_fields.iter().enumerate() {
        pairs.push((
            keys::sort_key(index, sort::FIELD_NAME),
            field.field_name().to_string(),
        ));
        pairs.push((
            keys::sort_key(index, sort::SORT_INDEX),
            field.sort_index().to_string(),
        ));
        pairs.push((
            keys::sort_key(index, sort::ORIENTATION),
            field.orientation().code().to_string(),
        ));
    }

    encode_group(&request.root_group, keys::ROOT_GROUP_PREFIX, &mut pairs);

    pairs
}

fn encode_group(group: &ConditionGroup, prefix: &str, pairs: &mut Vec<(String, String)>) {
    pairs.push((
        keys::group_operator_key(prefix),
        group.operator().code().to_string(),
    ));

    for (index, item) in group.conditions().iter().enumerate() {
        let key = |property: &str| keys::condition_key(prefix, index, property);

        pairs.push((key(condition::FIELD_NAME), item.field_name().to_string()));
        pairs.push((key(condition::OPERATOR), item.operator().code().to_string()));
        pairs.push((key(condition::DATA_TYPE), item.data_type().to_string()));
        pairs.push((key(condition::IS_COLLECTION), item.is_collection().to_string()));
        if let Some(value) = item.value() {
            pairs.push((key(condition::VALUE), raw_value(value)));
        }
    }

    for (index, sub_group) in group.sub_groups().iter().enumerate() {
        encode_group(sub_group, &keys::sub_group_prefix(prefix, index), pairs);
    }
}

fn raw_value(value: &ConditionValue) -> String {
    match value {
        ConditionValue::Scalar(leaf) => leaf.to_string(),
        ConditionValue::Collection(items) => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&COLLECTION_DELIMITER.to_string()),
    }
}

/// Percent-encoded `key=value&...` form of [`encode_query_request`].
pub fn to_query_string(request: &QueryRequest) -> String {
    encode_query_request(request)
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
