//! Theme dispatch: each [`Theme`] maps to a [`Skin`], a fixed set of class
//! names and icons. Skins only change presentation; every skin renders the
//! same catalog with the same handlers.

use a11ybar_core::{Feature, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    pub root: &'static str,
    pub panel: &'static str,
    pub header: &'static str,
    pub grid: &'static str,
    pub cell: &'static str,
    pub button: &'static str,
    pub button_active: &'static str,
    pub reset: &'static str,
    pub launcher: &'static str,
    pub launcher_icon: &'static str,
    pub content: &'static str,
    pub dialog: &'static str,
    pub tab: &'static str,
    pub tab_active: &'static str,
    pub chip: &'static str,
    icons: IconSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconSet {
    MaterialDesign,
    BoxIcons,
}

const MUI: Skin = Skin {
    root: "a11ybar a11ybar--mui",
    panel: "left-bar MuiPaper-root",
    header: "MuiGrid-container a11ybar__header",
    grid: "MuiGrid-container a11ybar__grid",
    cell: "MuiGrid-item a11ybar__cell",
    button: "MuiButton-root MuiButton-outlined accessibility-button",
    button_active: "MuiButton-root MuiButton-outlined accessibility-button is-active",
    reset: "MuiButton-root MuiButton-text",
    launcher: "MuiButton-root MuiButton-outlined disabled-person-button",
    launcher_icon: "mdi mdi-wheelchair-accessibility",
    content: "MuiBox-root a11ybar__content",
    dialog: "MuiDialog-paper a11ybar__dialog",
    tab: "MuiTab-root",
    tab_active: "MuiTab-root Mui-selected",
    chip: "MuiChip-root",
    icons: IconSet::MaterialDesign,
};

const BOOTSTRAP: Skin = Skin {
    root: "a11ybar a11ybar--bootstrap container-fluid",
    panel: "left-bar container",
    header: "row a11ybar__header",
    grid: "row a11ybar__grid",
    cell: "col-md-6 col-sm-12",
    button: "btn btn-lg btn-outline-dark accessibility-button mb-1",
    button_active: "btn btn-lg btn-primary accessibility-button mb-1 is-active",
    reset: "btn btn-primary",
    launcher: "btn btn-outline disabled-person-button",
    launcher_icon: "bx bx-accessibility",
    content: "container a11ybar__content",
    dialog: "modal-content a11ybar__dialog",
    tab: "nav-link",
    tab_active: "nav-link active",
    chip: "badge bg-secondary",
    icons: IconSet::BoxIcons,
};

/// Pick the skin for `theme`.
#[must_use]
pub const fn skin(theme: Theme) -> &'static Skin {
    match theme {
        Theme::Mui => &MUI,
        Theme::Bootstrap => &BOOTSTRAP,
    }
}

impl Skin {
    /// Icon class for a feature button.
    #[must_use]
    pub const fn icon(&self, feature: Feature) -> &'static str {
        match self.icons {
            IconSet::MaterialDesign => match feature {
                Feature::BigCursor => "mdi mdi-cursor-default-outline",
                Feature::ReadingMask => "mdi mdi-minus-box-outline",
                Feature::HighlightLink => "mdi mdi-link-box-outline",
                Feature::HideImage => "mdi mdi-image-off-outline",
                Feature::IncreasedLetterSpace => "mdi mdi-arrow-left-right-bold-outline",
                Feature::IncreasedLineHeight => "mdi mdi-arrow-up-down-bold-outline",
                Feature::DarkContrast => "mdi mdi-contrast-circle",
                Feature::LightContrast => "mdi mdi-brightness-6",
                Feature::InvertColor => "mdi mdi-invert-colors",
                Feature::LeftAlign => "mdi mdi-format-align-left",
                Feature::RightAlign => "mdi mdi-format-align-right",
                Feature::LowSaturation => "mdi mdi-water-minus-outline",
                Feature::HighSaturation => "mdi mdi-water-plus-outline",
                Feature::Desaturation => "mdi mdi-water-off-outline",
                Feature::Magnify => "mdi mdi-magnify-plus-outline",
                Feature::PageStructure => "mdi mdi-file-tree-outline",
            },
            IconSet::BoxIcons => match feature {
                Feature::BigCursor => "bx bx-pointer",
                Feature::ReadingMask => "bx bx-book-reader",
                Feature::HighlightLink => "bx bx-link",
                Feature::HideImage => "bx bx-image-alt",
                Feature::IncreasedLetterSpace => "bx bx-text",
                Feature::IncreasedLineHeight => "bx bx-move-vertical",
                Feature::DarkContrast => "bx bx-moon",
                Feature::LightContrast => "bx bx-sun",
                Feature::InvertColor => "bx bx-adjust",
                Feature::LeftAlign => "bx bx-align-left",
                Feature::RightAlign => "bx bx-align-right",
                Feature::LowSaturation => "bx bx-droplet",
                Feature::HighSaturation => "bx bxs-droplet",
                Feature::Desaturation => "bx bx-palette",
                Feature::Magnify => "bx bx-zoom-in",
                Feature::PageStructure => "bx bx-sitemap",
            },
        }
    }

    #[must_use]
    pub const fn button_class(&self, active: bool) -> &'static str {
        if active {
            self.button_active
        } else {
            self.button
        }
    }
}
