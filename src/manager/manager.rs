use std::collections::HashMap;
use std::sync::{
    PoisonError,
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard
};

use serde_json;

use super::managererror::ManagerError;

/// A named registry that can be filled from JSON.
pub trait IManager<V>
where
    V: Clone
{
    fn map(&self) -> RwLockReadGuard<'_, HashMap<String, V>>;

    fn map_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, V>>;

    /// Parses one element and its registry key without touching the map.
    fn obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn insert(&self, name: String, value: V) -> Option<V> {
        self.map_mut().insert(name, value)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let (name, v) = self.obj_from_json(json_value)?;
        self.insert(name, v);
        Ok(())
    }

    /// All or nothing: every element is parsed before the map is touched,
    /// so a failing element leaves the registry unchanged.
    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let mut parsed: Vec<(String, V)> = Vec::with_capacity(json_vec.len());
        for j in json_vec.iter() {
            parsed.push(self.obj_from_json(j.clone())?);
        }

        let mut map = self.map_mut();
        for (name, v) in parsed {
            map.insert(name, v);
        }
        Ok(())
    }
}

/// Thread-safe `IManager` whose elements are keyed by the name returned
/// from `get_obj_from_json`.
pub struct Manager<V> {
    map_lock: RwLock<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ManagerError>
}

impl<V> Manager<V>
where
    V: Clone
{
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ManagerError>) -> Manager<V> {
        Manager { map_lock: RwLock::new(HashMap::new()), get_obj_from_json }
    }
}

impl<V> IManager<V> for Manager<V>
where
    V: Clone
{
    fn map(&self) -> RwLockReadGuard<'_, HashMap<String, V>> {
        // the map holds no invariant a panicking writer could break
        self.map_lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn map_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, V>> {
        self.map_lock.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {
        (self.get_obj_from_json)(json_value)
    }
}
