//! Process-local [`TodoStore`].

use tokio::sync::RwLock;
use todo_types::{Todo, TodoId};

use super::{StoreError, TodoStore};

#[derive(Debug, Default)]
struct Inner {
    /// Next id to hand out. Only ever increases.
    next_id: TodoId,
    todos: Vec<Todo>,
}

/// In-memory task list guarded by a single lock.
///
/// Mutations take the write half, so id assignment and toggles are
/// serialized; reads share the lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.inner.read().await.todos.clone())
    }

    async fn insert(&self, content: &str) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        let todo = Todo::new(inner.next_id, content);
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.iter().find(|t| t.id == id).cloned())
    }

    async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.todos.iter_mut().find(|t| t.id == id).map(|todo| {
            todo.toggle();
            todo.clone()
        }))
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.todos.iter().position(|t| t.id == id) {
            Some(index) => {
                // `remove`, not `swap_remove`: insertion order is observable.
                inner.todos.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        assert!(MemoryStore::new().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.insert("a").await.unwrap();
        let b = store.insert("b").await.unwrap();
        assert_eq!(a.id, 0);
        assert_eq!(b.id, 1);
        assert!(!a.completed && !b.completed);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.insert("a").await.unwrap();
        let b = store.insert("b").await.unwrap();
        assert!(store.delete_by_id(b.id).await.unwrap());
        let c = store.insert("c").await.unwrap();
        assert!(c.id > b.id && c.id > a.id);
    }

    #[tokio::test]
    async fn toggle_is_an_involution() {
        let store = MemoryStore::new();
        let todo = store.insert("x").await.unwrap();
        let once = store.toggle_completed(todo.id).await.unwrap().unwrap();
        assert!(once.completed);
        let twice = store.toggle_completed(todo.id).await.unwrap().unwrap();
        assert_eq!(twice, todo);
        assert_eq!(store.find_by_id(todo.id).await.unwrap(), Some(todo));
    }

    #[tokio::test]
    async fn unknown_id_is_a_no_op() {
        let store = MemoryStore::new();
        store.insert("x").await.unwrap();
        let before = store.list().await.unwrap();
        assert_eq!(store.toggle_completed(99).await.unwrap(), None);
        assert!(!store.delete_by_id(99).await.unwrap());
        assert_eq!(store.find_by_id(99).await.unwrap(), None);
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_keeps_order_of_the_rest() {
        let store = MemoryStore::new();
        for content in ["a", "b", "c", "d"] {
            store.insert(content).await.unwrap();
        }
        store.delete_by_id(1).await.unwrap();
        let contents: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.content)
            .collect();
        assert_eq!(contents, ["a", "c", "d"]);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(&format!("task {i}")).await.unwrap().id })
            })
            .collect();
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }
}
