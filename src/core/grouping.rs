use crate::utils::error::Result;
use std::collections::HashMap;
use std::hash::Hash;

/// Groups `items` by a fallible key, keeping groups in the order their key was
/// first seen and items in input order. The first key error aborts the grouping.
pub fn try_group_by<'a, T, K, F>(items: &'a [T], mut key: F) -> Result<Vec<(K, Vec<&'a T>)>>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a T) -> Result<K>,
{
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for item in items {
        let k = key(item)?;
        match index.get(&k) {
            Some(&position) => groups[position].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    Ok(groups)
}
