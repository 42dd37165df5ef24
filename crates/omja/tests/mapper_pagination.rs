use omja::{MapOptions, Mapper, Pagination, Query, Record, RecordSet, Related};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn page(pagination: Pagination, query: Option<Query>) -> Value {
    let users: RecordSet = (1..=3)
        .map(|id| Record::from_json(json!({"id": id})))
        .collect();

    let mut options = MapOptions::default().with_pagination(pagination);
    if let Some(query) = query {
        options = options.with_query(query);
    }

    Mapper::new("https://domain.com", None)
        .unwrap()
        .map(Some(&Related::from(users)), "users", &options)
        .unwrap()
        .to_value()
}

#[test]
fn first_page() {
    let document = page(Pagination::new(0, 5).with_total(10), None);

    assert_eq!(
        document["links"],
        json!({
            "self": "https://domain.com/users",
            "next": "https://domain.com/users?page[limit]=5&page[offset]=5",
            "last": "https://domain.com/users?page[limit]=5&page[offset]=5"
        })
    );
}

#[test]
fn last_page() {
    let document = page(Pagination::new(5, 5).with_total(10), None);

    assert_eq!(
        document["links"],
        json!({
            "self": "https://domain.com/users",
            "first": "https://domain.com/users?page[limit]=5&page[offset]=0",
            "prev": "https://domain.com/users?page[limit]=5&page[offset]=0"
        })
    );
}

#[test]
fn single_page_has_no_pagination_links() {
    let document = page(Pagination::new(0, 10).with_total(5), None);
    assert_eq!(document["links"], json!({"self": "https://domain.com/users"}));
}

#[test]
fn zero_total_has_no_pagination_links() {
    let document = page(Pagination::new(0, 10).with_total(0), None);
    assert_eq!(document["links"], json!({"self": "https://domain.com/users"}));
}

#[test]
fn last_page_does_not_overlap() {
    let document = page(Pagination::new(3, 3).with_total(10), None);

    assert_eq!(
        document["links"],
        json!({
            "self": "https://domain.com/users",
            "first": "https://domain.com/users?page[limit]=3&page[offset]=0",
            "prev": "https://domain.com/users?page[limit]=3&page[offset]=0",
            "next": "https://domain.com/users?page[limit]=3&page[offset]=6",
            "last": "https://domain.com/users?page[limit]=1&page[offset]=9"
        })
    );
}

#[test]
fn row_count_is_used_as_total() {
    let document = page(Pagination::new(0, 5).with_row_count(12), None);

    assert_eq!(
        document["links"]["last"],
        json!("https://domain.com/users?page[limit]=2&page[offset]=10")
    );
}

#[test]
fn query_parameters_follow_page_parameters() {
    let query: Query = [("page", "2"), ("sort", "name"), ("include", "pets")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let document = page(Pagination::new(0, 5).with_total(10), Some(query));

    assert_eq!(
        document["links"]["next"],
        json!("https://domain.com/users?page[limit]=5&page[offset]=5&sort=name&include=pets")
    );
}

#[test]
fn offset_near_u64_max_does_not_overflow() {
    let document = page(Pagination::new(u64::MAX, 5).with_total(10), None);

    assert!(document["links"].get("next").is_none());
    assert!(document["links"].get("last").is_none());
    assert_eq!(
        document["links"]["first"],
        json!("https://domain.com/users?page[limit]=5&page[offset]=0")
    );
}

#[test]
fn bracketed_query_parameters_are_copied_as_given() {
    let query: Query = [("filter[name]", "Al"), ("fields[users]", "name,email")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let document = page(Pagination::new(0, 5).with_total(10), Some(query));

    assert_eq!(
        document["links"]["next"],
        json!(
            "https://domain.com/users?page[limit]=5&page[offset]=5\
             &filter[name]=Al&fields[users]=name,email"
        )
    );
}
