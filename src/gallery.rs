/// Clicks the gallery popup reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryClick {
    OpenButton,
    CloseButton,
    /// The popup element itself, outside its content.
    Backdrop,
    /// Anything inside the popup content.
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupAction {
    Open,
    Close,
}

impl GalleryClick {
    /// The gallery button only ever opens; it never closes an open popup.
    #[inline]
    pub fn action(self) -> Option<PopupAction> {
        match self {
            GalleryClick::OpenButton => Some(PopupAction::Open),
            GalleryClick::CloseButton | GalleryClick::Backdrop => Some(PopupAction::Close),
            GalleryClick::Content => None,
        }
    }
}

/// Whether the popup is visible after `click`, given whether it was open.
#[inline]
pub fn open_after(click: GalleryClick, was_open: bool) -> bool {
    match click.action() {
        Some(PopupAction::Open) => true,
        Some(PopupAction::Close) => false,
        None => was_open,
    }
}
