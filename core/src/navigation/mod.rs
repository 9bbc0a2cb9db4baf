//! Single-surface navigation with a back history.
//!
//! A `Navigator` swaps the content of exactly one `DisplaySurface`. Pages are
//! built by a `PageFactory` from a closed set of identities. Going back
//! restores the same page instance that was left, so any state it held comes
//! back with it. Nothing here returns `Err`: failures become
//! `NavigationOutcome::Failed` and leave the history untouched.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use tracing::{debug, warn};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum NavigationError {
        #[error("failed to create page {page}: {source}")]
        Create {
            page: String,
            #[source]
            source: Box<dyn std::error::Error>,
        },

        #[error("display surface rejected content: {0}")]
        Surface(String),
    }

    /// A surface refused new content and hands it back unchanged.
    #[derive(Debug)]
    pub struct Rejected<C> {
        pub content: C,
        pub reason: String,
    }
}

use error::{NavigationError, Rejected};

/// Builds page instances from page identities.
pub trait PageFactory {
    type Id: Copy + fmt::Debug;
    type Page;
    /// Reserved for pages that take an argument.
    type Parameter: ?Sized;
    type Error: std::error::Error + 'static;

    fn create(
        &self,
        id: Self::Id,
        parameter: Option<&Self::Parameter>,
    ) -> Result<Self::Page, Self::Error>;
}

/// The single UI region whose content is swapped during navigation.
pub trait DisplaySurface {
    type Content;

    fn content(&self) -> Option<&Self::Content>;

    fn content_mut(&mut self) -> Option<&mut Self::Content>;

    /// Shows `content` and returns what was shown before.
    fn replace_content(
        &mut self,
        content: Self::Content,
    ) -> Result<Option<Self::Content>, Rejected<Self::Content>>;
}

/// In-memory display surface.
#[derive(Debug)]
pub struct ContentFrame<P> {
    content: Option<P>,
}

impl<P> ContentFrame<P> {
    pub fn new() -> Self {
        Self { content: None }
    }

    pub fn with_content(content: P) -> Self {
        Self {
            content: Some(content),
        }
    }
}

impl<P> Default for ContentFrame<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DisplaySurface for ContentFrame<P> {
    type Content = P;

    fn content(&self) -> Option<&P> {
        self.content.as_ref()
    }

    fn content_mut(&mut self) -> Option<&mut P> {
        self.content.as_mut()
    }

    fn replace_content(&mut self, content: P) -> Result<Option<P>, Rejected<P>> {
        Ok(self.content.replace(content))
    }
}

#[must_use]
#[derive(Debug)]
pub enum NavigationOutcome {
    Navigated,
    Skipped(Skip),
    Failed(NavigationError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    /// No display surface is attached.
    Detached,
    /// Back was requested with nothing to go back to.
    EmptyHistory,
}

impl NavigationOutcome {
    pub fn is_navigated(&self) -> bool {
        matches!(self, NavigationOutcome::Navigated)
    }
}

pub struct Navigator<F, S>
where
    F: PageFactory,
    S: DisplaySurface<Content = F::Page>,
{
    factory: F,
    surface: Option<S>,
    /// Most recent last.
    history: Vec<F::Page>,
    // Confined to the UI thread.
    _not_send: PhantomData<Rc<()>>,
}

impl<F, S> Navigator<F, S>
where
    F: PageFactory,
    S: DisplaySurface<Content = F::Page>,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            surface: None,
            history: Vec::new(),
            _not_send: PhantomData,
        }
    }

    /// Attaches the display surface, returning the one previously attached.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn current(&self) -> Option<&F::Page> {
        self.surface.as_ref().and_then(|surface| surface.content())
    }

    pub fn current_mut(&mut self) -> Option<&mut F::Page> {
        self.surface.as_mut().and_then(|surface| surface.content_mut())
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Empties the back history. The current page stays.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Navigation operations.
impl<F, S> Navigator<F, S>
where
    F: PageFactory,
    S: DisplaySurface<Content = F::Page>,
{
    /// Shows a new instance of `id`, pushing the outgoing page onto the history.
    pub fn navigate(
        &mut self,
        id: F::Id,
        parameter: Option<&F::Parameter>,
    ) -> NavigationOutcome {
        let Some(surface) = self.surface.as_mut() else {
            debug!(page = ?id, "navigation skipped, no surface attached");
            return NavigationOutcome::Skipped(Skip::Detached);
        };

        let page = match self.factory.create(id, parameter) {
            Ok(page) => page,
            Err(err) => {
                warn!(page = ?id, error = %err, "navigation error");
                return NavigationOutcome::Failed(NavigationError::Create {
                    page: format!("{id:?}"),
                    source: Box::new(err),
                });
            }
        };

        match surface.replace_content(page) {
            Ok(Some(previous)) => self.history.push(previous),
            Ok(None) => {}
            Err(rejected) => {
                warn!(page = ?id, reason = %rejected.reason, "navigation error");
                return NavigationOutcome::Failed(NavigationError::Surface(rejected.reason));
            }
        }

        debug!(page = ?id, depth = self.history.len(), "navigated");
        NavigationOutcome::Navigated
    }

    /// Restores the most recently left page. The page being left is dropped.
    pub fn navigate_back(&mut self) -> NavigationOutcome {
        let Some(surface) = self.surface.as_mut() else {
            return NavigationOutcome::Skipped(Skip::Detached);
        };
        let Some(previous) = self.history.pop() else {
            return NavigationOutcome::Skipped(Skip::EmptyHistory);
        };

        match surface.replace_content(previous) {
            Ok(_) => {
                debug!(depth = self.history.len(), "navigated back");
                NavigationOutcome::Navigated
            }
            Err(Rejected { content, reason }) => {
                warn!(reason = %reason, "navigate back error");
                self.history.push(content);
                NavigationOutcome::Failed(NavigationError::Surface(reason))
            }
        }
    }
}
