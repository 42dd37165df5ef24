use omja::{
    Inclusion, MapOptions, Mapper, Record, RecordSet, Related, RelationSelect, RelationTypes,
    Relations,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn map(data: Record, ty: &str, options: MapOptions) -> Value {
    Mapper::new("https://h", None)
        .unwrap()
        .map(Some(&Related::from(data)), ty, &options)
        .unwrap()
        .to_value()
}

fn post_with_author_and_editor() -> Record {
    Record::from_json(json!({"id": 1, "title": "T"}))
        .with_relation("author", Record::from_json(json!({"id": 10, "x": 1})))
        .with_relation("editor", Record::from_json(json!({"id": 20, "y": 2})))
}

#[test]
fn allow_list_restricts_relationships_and_included() {
    let options = MapOptions::default()
        .with_links(false)
        .with_relations(RelationSelect::fields(["editor"]));

    let document = map(post_with_author_and_editor(), "posts", options);

    assert_eq!(
        document,
        json!({
            "data": {
                "type": "posts",
                "id": "1",
                "attributes": {"title": "T"},
                "relationships": {"editor": {"data": {"type": "editors", "id": "20"}}}
            },
            "included": [{"type": "editors", "id": "20", "attributes": {"y": 2}}]
        })
    );
}

#[test]
fn referenced_but_not_included() {
    let options = MapOptions::default()
        .with_links(false)
        .with_relations(
            RelationSelect::fields(["author", "editor"]).with_included(vec!["editor"]),
        );

    let document = map(post_with_author_and_editor(), "posts", options);

    assert_eq!(
        document["data"]["relationships"],
        json!({
            "author": {"data": {"type": "authors", "id": "10"}},
            "editor": {"data": {"type": "editors", "id": "20"}}
        })
    );
    assert_eq!(
        document["included"],
        json!([{"type": "editors", "id": "20", "attributes": {"y": 2}}])
    );
}

#[test]
fn relations_false_drops_relationships() {
    let document = map(
        post_with_author_and_editor(),
        "posts",
        MapOptions::default().with_links(false).with_relations(false),
    );

    assert_eq!(
        document,
        json!({
            "data": {"type": "posts", "id": "1", "attributes": {"title": "T"}}
        })
    );
}

#[test]
fn included_false_references_only() {
    let options = MapOptions::default()
        .with_links(false)
        .with_relations(Relations::Select(RelationSelect {
            included: Inclusion::All(false),
            fields: None,
        }));

    let document = map(post_with_author_and_editor(), "posts", options);

    assert!(document.get("included").is_none());
    assert_eq!(
        document["data"]["relationships"]["author"],
        json!({"data": {"type": "authors", "id": "10"}})
    );
}

#[test]
fn shared_related_record_is_included_once() {
    let ann = || Record::from_json(json!({"id": 9, "name": "Ann"}));
    let books = RecordSet::from(vec![
        Record::from_json(json!({"id": 1, "title": "A"})).with_relation("author", ann()),
        Record::from_json(json!({"id": 2, "title": "B"})).with_relation("author", ann()),
    ]);

    let document = Mapper::new("https://h", None)
        .unwrap()
        .map(
            Some(&Related::from(books)),
            "books",
            &MapOptions::default().with_links(false),
        )
        .unwrap()
        .to_value();

    assert_eq!(
        document["included"],
        json!([{"type": "authors", "id": "9", "attributes": {"name": "Ann"}}])
    );
    assert_eq!(
        document["data"][1]["relationships"]["author"],
        json!({"data": {"type": "authors", "id": "9"}})
    );
}

#[test]
fn nested_relations_with_links() {
    let article = Record::from_json(json!({"id": 1, "title": "T"})).with_relation(
        "author",
        Record::from_json(json!({"id": 2, "name": "N"}))
            .with_relation("company", Record::from_json(json!({"id": 3, "city": "C"}))),
    );

    let document = map(article, "article", MapOptions::default());

    assert_eq!(
        document,
        json!({
            "links": {"self": "https://h/articles"},
            "data": {
                "type": "articles",
                "id": "1",
                "attributes": {"title": "T"},
                "relationships": {
                    "author": {
                        "data": {"type": "authors", "id": "2"},
                        "links": {
                            "self": "https://h/articles/1/relationships/author",
                            "related": "https://h/articles/1/author"
                        }
                    }
                },
                "links": {"self": "https://h/articles/1"}
            },
            "included": [
                {
                    "type": "authors",
                    "id": "2",
                    "attributes": {"name": "N"},
                    "relationships": {
                        "company": {
                            "data": {"type": "companies", "id": "3"},
                            "links": {
                                "self": "https://h/authors/2/relationships/company",
                                "related": "https://h/authors/2/company"
                            }
                        }
                    },
                    "links": {"self": "https://h/authors/2"}
                },
                {
                    "type": "companies",
                    "id": "3",
                    "attributes": {"city": "C"},
                    "links": {"self": "https://h/companies/3"}
                }
            ]
        })
    );
}

#[test]
fn to_many_and_empty_relations() {
    let post = Record::from_json(json!({"id": 1}))
        .with_relation(
            "comments",
            vec![
                Record::from_json(json!({"id": 5, "body": "first"})),
                Record::from_json(json!({"id": 6, "body": "second"})),
            ],
        )
        .with_relation("tags", RecordSet::new());

    let document = map(post, "posts", MapOptions::default().with_links(false));

    assert_eq!(
        document["data"]["relationships"],
        json!({
            "comments": {"data": [
                {"type": "comments", "id": "5"},
                {"type": "comments", "id": "6"}
            ]},
            "tags": {"data": []}
        })
    );
    assert_eq!(document["included"].as_array().unwrap().len(), 2);
}

#[test]
fn relation_types_map() {
    let book = Record::from_json(json!({"id": 1}))
        .with_relation("writer", Record::from_json(json!({"id": 2})));

    let types = RelationTypes::Map(
        [("writer".to_string(), "person".to_string())]
            .into_iter()
            .collect(),
    );
    let options = MapOptions::default()
        .with_links(false)
        .with_relation_types(types);

    let document = map(book, "books", options);

    assert_eq!(
        document["data"]["relationships"]["writer"],
        json!({"data": {"type": "person", "id": "2"}})
    );
    assert_eq!(document["included"][0]["type"], json!("person"));
}

#[test]
fn pivot_data_becomes_identifier_meta() {
    let post = Record::from_json(json!({"id": 1})).with_relation(
        "tags",
        vec![Record::from_json(json!({"id": 4, "label": "rust"})).with_pivot("position", 2)],
    );

    let document = map(post, "posts", MapOptions::default().with_links(false));

    assert_eq!(
        document["data"]["relationships"]["tags"],
        json!({"data": [{"type": "tags", "id": "4", "meta": {"position": 2}}]})
    );
    assert_eq!(
        document["included"],
        json!([{"type": "tags", "id": "4", "attributes": {"label": "rust"}}])
    );
}

#[test]
fn self_referencing_data_terminates() {
    let al = || Record::from_json(json!({"id": 1, "name": "Al"}));
    let peg = Record::from_json(json!({"id": 2, "name": "Peg"})).with_relation(
        "spouse",
        al().with_relation("spouse", Record::from_json(json!({"id": 2}))),
    );
    let root = al().with_relation("spouse", peg);

    let document = map(root, "spouse", MapOptions::default().with_links(false));

    assert_eq!(document["data"]["id"], json!("1"));
    assert_eq!(
        document["included"],
        json!([{
            "type": "spouses",
            "id": "2",
            "attributes": {"name": "Peg"},
            "relationships": {"spouse": {"data": {"type": "spouses", "id": "1"}}}
        }])
    );
}
