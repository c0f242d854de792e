//! Catalog UI strings in French and English.
//!
//! Placeholders use `{{name}}` and are filled by [`tr_with`].

use crate::prefs::Locale;

/// Translatable catalog strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    CatalogTitle,
    /// `{{path}}`
    CatalogSubtitle,
    SearchPlaceholder,
    SortAscending,
    SortDescending,
    SortTitle,
    Loading,
    /// `{{path}}`
    NoFiles,
    /// `{{count}}`
    FilesCount,
    /// `{{query}}`
    FilteredBy,
    Open,
    /// `{{title}}`
    OpenLabel,
    Download,
    /// `{{title}}`
    DownloadLabel,
    Close,
    ManifestHint,
    OpenNewTab,
    ModalFallback,
    Fullscreen,
    ExitFullscreen,
    PreviousPage,
    NextPage,
    /// `{{page}}`, `{{total}}`
    PageOf,
    FooterTip,
    ToggleTheme,
    ToggleLocale,
    DiscoveryFailed,
}

/// Look up a string.
pub fn tr(locale: Locale, text: Text) -> &'static str {
    match locale {
        Locale::Fr => french(text),
        Locale::En => english(text),
    }
}

/// Look up a string and fill its `{{name}}` placeholders.
pub fn tr_with(locale: Locale, text: Text, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(tr(locale, text).to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{{{}}}}}", name), value)
        })
}

fn french(text: Text) -> &'static str {
    match text {
        Text::CatalogTitle => "PFE Books",
        Text::CatalogSubtitle => "Tous les PDFs trouvés dans {{path}}",
        Text::SearchPlaceholder => "Rechercher un PFE...",
        Text::SortAscending => "A→Z",
        Text::SortDescending => "Z→A",
        Text::SortTitle => "Trier",
        Text::Loading => "Chargement…",
        Text::NoFiles => "Aucun fichier PDF trouvé dans {{path}}.",
        Text::FilesCount => "{{count}} fichier(s)",
        Text::FilteredBy => "Filtré par \"{{query}}\"",
        Text::Open => "Ouvrir",
        Text::OpenLabel => "Ouvrir {{title}}",
        Text::Download => "Télécharger",
        Text::DownloadLabel => "Télécharger {{title}}",
        Text::Close => "Fermer",
        Text::ManifestHint => "Pour générer automatiquement le fichier manifest, exécutez :",
        Text::OpenNewTab => "Ouvrir dans un nouvel onglet",
        Text::ModalFallback => {
            "Impossible d'afficher le PDF dans la popup sur cet appareil. Ouvrez le PDF dans un nouvel onglet :"
        }
        Text::Fullscreen => "Plein écran",
        Text::ExitFullscreen => "Quitter le plein écran",
        Text::PreviousPage => "Précédent",
        Text::NextPage => "Suivant",
        Text::PageOf => "Page {{page}} / {{total}}",
        Text::FooterTip => {
            "Astuce : placer un fichier files.json avec une liste JSON de fichiers accélère le chargement."
        }
        Text::ToggleTheme => "Basculer thème",
        Text::ToggleLocale => "Changer de langue",
        Text::DiscoveryFailed => {
            "Aucun fichier trouvé automatiquement. Ajoutez manuellement files.json ou exécutez le script pour le générer."
        }
    }
}

fn english(text: Text) -> &'static str {
    match text {
        Text::CatalogTitle => "PFE Books",
        Text::CatalogSubtitle => "All PDFs found in {{path}}",
        Text::SearchPlaceholder => "Search a PFE...",
        Text::SortAscending => "A→Z",
        Text::SortDescending => "Z→A",
        Text::SortTitle => "Sort",
        Text::Loading => "Loading…",
        Text::NoFiles => "No PDF files found in {{path}}.",
        Text::FilesCount => "{{count}} file(s)",
        Text::FilteredBy => "Filtered by \"{{query}}\"",
        Text::Open => "Open",
        Text::OpenLabel => "Open {{title}}",
        Text::Download => "Download",
        Text::DownloadLabel => "Download {{title}}",
        Text::Close => "Close",
        Text::ManifestHint => "To auto-generate the manifest file, run:",
        Text::OpenNewTab => "Open in new tab",
        Text::ModalFallback => {
            "Unable to preview the PDF in the popup on this device. Open the PDF in a new tab:"
        }
        Text::Fullscreen => "Fullscreen",
        Text::ExitFullscreen => "Exit fullscreen",
        Text::PreviousPage => "Previous",
        Text::NextPage => "Next",
        Text::PageOf => "Page {{page}} / {{total}}",
        Text::FooterTip => {
            "Tip: placing a files.json with a JSON list of files speeds up loading."
        }
        Text::ToggleTheme => "Toggle theme",
        Text::ToggleLocale => "Switch language",
        Text::DiscoveryFailed => {
            "No files found automatically. Add files.json by hand or run the script to generate it."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tr_with_fills_placeholders() {
        assert_eq!(
            tr_with(Locale::En, Text::FilesCount, &[("count", "3")]),
            "3 file(s)"
        );
        assert_eq!(
            tr_with(Locale::Fr, Text::PageOf, &[("page", "2"), ("total", "5")]),
            "Page 2 / 5"
        );
    }

    #[test]
    fn test_unknown_placeholder_is_left_alone() {
        assert_eq!(
            tr_with(Locale::En, Text::NoFiles, &[("count", "1")]),
            "No PDF files found in {{path}}."
        );
    }
}
