use anyhow::Result;

use crate::core::store::KeyValueStore;

pub const DRAFT_TITLE_KEY: &str = "draft_title";
pub const DRAFT_CONTENT_KEY: &str = "draft_content";
pub const DRAFT_AUTHOR_KEY: &str = "draft_author";

/// Route the draft feature is scoped to. The check is an exact path
/// comparison, so an edit page or `/create/anything` never touches drafts.
pub const CREATE_PAGE_PATH: &str = "/create";

pub fn is_create_page(path: &str) -> bool {
    path == CREATE_PAGE_PATH
}

/// In-progress, unsubmitted post content mirrored into the key-value store so
/// an abandoned create page can be picked up again later.
///
/// Lifecycle: every keystroke overwrites all three keys wholesale
/// (last-write-wins, no merge), and a form submit removes them. The clear is
/// optimistic: it fires at submit time whether or not the server ends up
/// accepting the post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Draft {
    /// Read the stored draft. Missing keys load as empty fields.
    pub fn load(store: &impl KeyValueStore) -> Result<Draft> {
        let draft = Draft {
            title: store.get(DRAFT_TITLE_KEY)?.unwrap_or_default(),
            content: store.get(DRAFT_CONTENT_KEY)?.unwrap_or_default(),
            author: store.get(DRAFT_AUTHOR_KEY)?.unwrap_or_default(),
        };
        log::debug!("loaded draft (empty: {})", draft.is_empty());
        Ok(draft)
    }

    /// Write all three fields unconditionally, including unchanged ones.
    pub fn save(&self, store: &impl KeyValueStore) -> Result<()> {
        store.set(DRAFT_TITLE_KEY, &self.title)?;
        store.set(DRAFT_CONTENT_KEY, &self.content)?;
        store.set(DRAFT_AUTHOR_KEY, &self.author)?;
        Ok(())
    }

    /// Remove all three keys, whether or not they exist.
    pub fn clear(store: &impl KeyValueStore) -> Result<()> {
        store.remove(DRAFT_TITLE_KEY)?;
        store.remove(DRAFT_CONTENT_KEY)?;
        store.remove(DRAFT_AUTHOR_KEY)?;
        log::debug!("cleared stored draft");
        Ok(())
    }

    /// Raw emptiness, no trimming: a draft of whitespace is still a draft.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.author.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    #[test]
    fn load_from_empty_store_yields_empty_draft() {
        let store = MemoryStore::new();
        let draft = Draft::load(&store).unwrap();
        assert!(draft.is_empty());
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let draft = Draft {
            title: "A".to_string(),
            content: "本文です".to_string(),
            author: "太郎".to_string(),
        };
        draft.save(&store).unwrap();
        assert_eq!(Draft::load(&store).unwrap(), draft);
    }

    #[test]
    fn save_uses_the_fixed_keys() {
        let store = MemoryStore::new();
        let draft = Draft {
            title: "t".to_string(),
            content: "c".to_string(),
            author: "a".to_string(),
        };
        draft.save(&store).unwrap();
        assert_eq!(store.get("draft_title").unwrap().as_deref(), Some("t"));
        assert_eq!(store.get("draft_content").unwrap().as_deref(), Some("c"));
        assert_eq!(store.get("draft_author").unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn save_overwrites_wholesale() {
        let store = MemoryStore::new();
        Draft {
            title: "old".to_string(),
            content: "old".to_string(),
            author: "old".to_string(),
        }
        .save(&store)
        .unwrap();
        Draft {
            title: "new".to_string(),
            content: String::new(),
            author: "old".to_string(),
        }
        .save(&store)
        .unwrap();

        let loaded = Draft::load(&store).unwrap();
        assert_eq!(loaded.title, "new");
        // Cleared fields are written through too, not merged.
        assert_eq!(loaded.content, "");
        assert_eq!(loaded.author, "old");
    }

    #[test]
    fn clear_removes_every_key() {
        let store = MemoryStore::new();
        Draft {
            title: "t".to_string(),
            content: "c".to_string(),
            author: "a".to_string(),
        }
        .save(&store)
        .unwrap();
        Draft::clear(&store).unwrap();
        assert!(store.is_empty());
        assert!(Draft::load(&store).unwrap().is_empty());
    }

    #[test]
    fn clear_on_empty_store_is_fine() {
        let store = MemoryStore::new();
        Draft::clear(&store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn whitespace_draft_is_not_empty() {
        let draft = Draft {
            title: " ".to_string(),
            ..Draft::default()
        };
        assert!(!draft.is_empty());
    }

    #[test]
    fn create_page_check_is_exact() {
        assert!(is_create_page("/create"));
        assert!(!is_create_page("/create/"));
        assert!(!is_create_page("/create/extra"));
        assert!(!is_create_page("/creates"));
        assert!(!is_create_page("/edit/1"));
        assert!(!is_create_page("/"));
    }
}
