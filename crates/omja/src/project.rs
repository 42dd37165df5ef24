use crate::guards::{attributes_of, relations_of};

use indexmap::IndexSet;
use omja_core::{Error, Node, Record, Related, Result, Tree};

/// Projects a record graph of resource type `ty` into a plain data tree.
///
/// Every node at every depth gets a resolved id; relation values replace any
/// attribute of the same name. Pivot columns become the node's `meta`. A
/// record that appears again below itself is projected without its
/// relations, mirroring [`sample`](crate::sample::sample).
pub fn to_json(data: Option<&Related>, ty: &str) -> Result<Tree> {
    let mut path = IndexSet::new();
    match data {
        None => Ok(Tree::Null),
        Some(data) => project_related(data, ty, &mut path),
    }
}

fn project_related(
    data: &Related,
    ty: &str,
    path: &mut IndexSet<(String, String)>,
) -> Result<Tree> {
    match data {
        Related::One(record) => Ok(Tree::One(Box::new(project_record(record, ty, path)?))),
        Related::Many(set) => set
            .iter()
            .map(|record| project_record(record, ty, path))
            .collect::<Result<Vec<_>>>()
            .map(Tree::Many),
    }
}

fn project_record(
    record: &Record,
    ty: &str,
    path: &mut IndexSet<(String, String)>,
) -> Result<Node> {
    let id = record.id().ok_or_else(|| Error::missing_identifier(ty))?;

    let mut node = Node {
        id: id.clone(),
        fields: attributes_of(Some(record))
            .filter(|(name, _)| !record.relations.contains_key(*name))
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect(),
        relations: Default::default(),
        meta: record.pivot.clone(),
    };

    let key = (ty.to_string(), id);
    if !path.insert(key.clone()) {
        return Ok(node);
    }

    for (name, related) in relations_of(Some(record)) {
        let tree = project_related(related, name, path)
            .map_err(|err| err.context(omja_core::err!("projecting relation `{name}`")))?;
        node.relations.insert(name.to_string(), tree);
    }

    path.shift_remove(&key);
    Ok(node)
}
