use crate::api::Work;

/// One rendered work: `<figure><img src alt category><figcaption>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub image_url: String,
    pub alt: String,
    pub category_id: i64,
    pub caption: String,
}

impl From<&Work> for Card {
    fn from(work: &Work) -> Self {
        Card {
            image_url: work.image_url.clone(),
            alt: work.title.clone(),
            category_id: work.category_id,
            caption: work.title.clone(),
        }
    }
}

/// The `.gallery` container. Rendering always starts from an empty
/// container, there is no diffing against previous contents.
#[derive(Debug, Default, Clone)]
pub struct Gallery {
    cards: Vec<Card>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Replace the contents with one card per work, in input order.
    pub fn render<'a, I>(&mut self, works: I)
    where
        I: IntoIterator<Item = &'a Work>,
    {
        self.clear();
        self.cards.extend(works.into_iter().map(Card::from));
        tracing::debug!(cards = self.cards.len(), "gallery rendered");
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
