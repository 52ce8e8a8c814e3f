use std::sync::Arc;

use thiserror::Error;

use crate::projects::Project;

/// Which project is open in the modal, and whether one of its screenshots is
/// blown up in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gallery {
    #[default]
    Closed,
    Viewing(Arc<Project>),
    Enlarged(Arc<Project>, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryMsg {
    Open(Arc<Project>),
    Close,
    Enlarge(usize),
    CloseEnlarged,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("no project is open")]
    NothingOpen,
    #[error("screenshot {index} out of range (project has {len})")]
    ScreenshotOutOfRange { index: usize, len: usize },
}

impl Gallery {
    pub fn project(&self) -> Option<&Arc<Project>> {
        match self {
            Self::Closed => None,
            Self::Viewing(p) | Self::Enlarged(p, _) => Some(p),
        }
    }

    pub fn enlarged(&self) -> Option<usize> {
        match self {
            Self::Enlarged(_, i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// On error the state is left untouched.
    pub fn apply(&mut self, msg: GalleryMsg) -> Result<(), GalleryError> {
        let next = match msg {
            GalleryMsg::Open(project) => Self::Viewing(project),
            GalleryMsg::Close => Self::Closed,
            GalleryMsg::Enlarge(index) => {
                let project = self.project().ok_or(GalleryError::NothingOpen)?;
                let len = project.screenshots.len();
                if index >= len {
                    return Err(GalleryError::ScreenshotOutOfRange { index, len });
                }
                Self::Enlarged(project.clone(), index)
            }
            GalleryMsg::CloseEnlarged => match self {
                Self::Enlarged(project, _) => Self::Viewing(project.clone()),
                _ => return Ok(()),
            },
        };
        *self = next;
        Ok(())
    }

    /// Message the Escape key maps to in the current state.
    pub fn escape(&self) -> Option<GalleryMsg> {
        match self {
            Self::Closed => None,
            Self::Viewing(_) => Some(GalleryMsg::Close),
            Self::Enlarged(..) => Some(GalleryMsg::CloseEnlarged),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, screenshots: &[&str]) -> Arc<Project> {
        Arc::new(Project {
            title: title.to_string(),
            description: format!("{title} description"),
            screenshots: screenshots.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn sma_erp() -> Arc<Project> {
        project("SMA ERP", &["a.png", "b.png", "c.png"])
    }

    #[test]
    fn test_modal_and_lightbox_walkthrough() {
        let erp = sma_erp();
        let mut gallery = Gallery::default();
        assert!(!gallery.is_open());

        gallery.apply(GalleryMsg::Open(erp.clone())).unwrap();
        assert_eq!(gallery, Gallery::Viewing(erp.clone()));

        gallery.apply(GalleryMsg::Enlarge(1)).unwrap();
        assert_eq!(gallery.enlarged(), Some(1));
        assert_eq!(gallery.project(), Some(&erp));

        gallery.apply(GalleryMsg::CloseEnlarged).unwrap();
        assert_eq!(gallery, Gallery::Viewing(erp.clone()));

        gallery.apply(GalleryMsg::Close).unwrap();
        assert_eq!(gallery, Gallery::Closed);
    }

    #[test]
    fn test_close_from_enlarged_clears_everything() {
        let mut gallery = Gallery::Enlarged(sma_erp(), 2);
        gallery.apply(GalleryMsg::Close).unwrap();
        assert_eq!(gallery.project(), None);
        assert_eq!(gallery.enlarged(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut gallery = Gallery::Closed;
        gallery.apply(GalleryMsg::Close).unwrap();
        gallery.apply(GalleryMsg::Close).unwrap();
        assert_eq!(gallery, Gallery::Closed);
    }

    #[test]
    fn test_enlarge_out_of_range_is_rejected() {
        let erp = sma_erp();
        let mut gallery = Gallery::Viewing(erp.clone());
        assert_eq!(
            gallery.apply(GalleryMsg::Enlarge(3)),
            Err(GalleryError::ScreenshotOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(gallery, Gallery::Viewing(erp.clone()));

        let mut gallery = Gallery::Enlarged(erp.clone(), 0);
        assert!(gallery.apply(GalleryMsg::Enlarge(usize::MAX)).is_err());
        assert_eq!(gallery, Gallery::Enlarged(erp, 0));
    }

    #[test]
    fn test_enlarge_without_project_is_rejected() {
        let mut gallery = Gallery::Closed;
        assert_eq!(
            gallery.apply(GalleryMsg::Enlarge(0)),
            Err(GalleryError::NothingOpen)
        );
        assert_eq!(gallery, Gallery::Closed);
    }

    #[test]
    fn test_opening_another_project_drops_enlarged_index() {
        let design = project("UI Redesign", &["d1.jpg", "d2.jpg"]);
        let mut gallery = Gallery::Enlarged(sma_erp(), 2);
        gallery.apply(GalleryMsg::Open(design.clone())).unwrap();
        assert_eq!(gallery, Gallery::Viewing(design));
        assert_eq!(gallery.enlarged(), None);
    }

    #[test]
    fn test_enlarge_while_enlarged_retargets() {
        let mut gallery = Gallery::Enlarged(sma_erp(), 0);
        gallery.apply(GalleryMsg::Enlarge(2)).unwrap();
        assert_eq!(gallery.enlarged(), Some(2));
    }

    #[test]
    fn test_close_enlarged_outside_lightbox_is_noop() {
        let erp = sma_erp();
        let mut gallery = Gallery::Viewing(erp.clone());
        gallery.apply(GalleryMsg::CloseEnlarged).unwrap();
        assert_eq!(gallery, Gallery::Viewing(erp));

        let mut gallery = Gallery::Closed;
        gallery.apply(GalleryMsg::CloseEnlarged).unwrap();
        assert_eq!(gallery, Gallery::Closed);
    }

    #[test]
    fn test_open_while_viewing_or_enlarged() {
        let erp = sma_erp();
        assert!(Gallery::Viewing(erp.clone()).is_open());
        assert!(Gallery::Enlarged(erp.clone(), 1).is_open());

        let mut gallery = Gallery::Enlarged(erp, 1);
        gallery.apply(GalleryMsg::Close).unwrap();
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_escape_backs_out_one_level() {
        let erp = sma_erp();
        assert_eq!(Gallery::Closed.escape(), None);
        assert_eq!(Gallery::Viewing(erp.clone()).escape(), Some(GalleryMsg::Close));
        assert_eq!(
            Gallery::Enlarged(erp, 1).escape(),
            Some(GalleryMsg::CloseEnlarged)
        );
    }
}
