use crate::article::{Article, Content};
use crate::stack::{SlotError, Stack};

/// Editor bound to a single stack slot
///
/// Takes bare content (what an edit form produces) and hands it to
/// [`Stack::edit`] wrapped as an article.
#[derive(Debug)]
pub struct ArticleEditor<'a> {
    stack: &'a mut Stack,
    index: usize,
}

impl<'a> ArticleEditor<'a> {
    pub fn new(stack: &'a mut Stack, index: usize) -> Self {
        Self { stack, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Merge `content` into the bound article
    pub fn set_article(&mut self, content: Content) -> Result<(), SlotError> {
        let patch = Article::from_content(content);
        self.stack.edit(self.index, &patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: serde_json::Value) -> Content {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_set_article_merges_into_slot() {
        let mut stack = Stack::new();
        stack
            .push(2, Article::new(7).with_content(content(json!({"title": "Old", "lead": "L"}))))
            .unwrap();

        let mut editor = ArticleEditor::new(&mut stack, 2);
        editor.set_article(content(json!({"title": "Title!"}))).unwrap();

        let article = stack.get(2).unwrap();
        assert_eq!(article.title(), Some("Title!"));
        assert_eq!(article.id, Some(json!(7)));
        assert_eq!(article.content.as_ref().unwrap().get("lead"), Some(&json!("L")));
    }

    #[test]
    fn test_set_article_on_empty_slot() {
        let mut stack = Stack::new();
        stack.push(0, Article::new(1)).unwrap();

        let mut editor = ArticleEditor::new(&mut stack, 1);
        assert_eq!(editor.index(), 1);
        assert_eq!(
            editor.set_article(content(json!({"title": "x"}))),
            Err(SlotError::EmptySlot(1))
        );
    }

    #[test]
    fn test_set_article_at_slot_zero() {
        let mut stack = Stack::new();
        stack.push(0, Article::new(1)).unwrap();

        ArticleEditor::new(&mut stack, 0)
            .set_article(content(json!({"title": "First"})))
            .unwrap();

        assert_eq!(stack.get(0).unwrap().title(), Some("First"));
    }
}
