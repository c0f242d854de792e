//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDownAZ as SortAscending, LuArrowUpZA as SortDescending, LuBookOpen as FilePdf,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuDownload as Download,
        LuExternalLink as ExternalLink, LuLanguages as Language, LuMaximize as Fullscreen,
        LuMinimize as ExitFullscreen, LuMoon as Moon, LuSearch as Search, LuSun as Sun,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsDownload as Download, BsFileEarmarkPdf as FilePdf,
        BsFullscreen as Fullscreen, BsFullscreenExit as ExitFullscreen, BsMoonFill as Moon,
        BsSearch as Search, BsSortAlphaDown as SortAscending,
        BsSortAlphaUpAlt as SortDescending, BsSunFill as Sun, BsTranslate as Language,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(SEARCH, Search);
themed_icon!(SORT_ASCENDING, SortAscending);
themed_icon!(SORT_DESCENDING, SortDescending);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(DOWNLOAD, Download);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(EXIT_FULLSCREEN, ExitFullscreen);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
themed_icon!(LANGUAGE, Language);
