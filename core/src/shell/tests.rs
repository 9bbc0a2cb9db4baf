use super::*;
use crate::navigation::Skip;
use crate::theme::{FixedSystemTheme, SystemTheme, ThemeVariant, UnsupportedSystemTheme};
use tempfile::TempDir;

mod common {
    use super::*;

    #[derive(Default)]
    pub(super) struct RecordingChrome {
        pub(super) palettes: Vec<Palette>,
        pub(super) title_bars: Vec<TitleBar>,
    }

    impl Chrome for RecordingChrome {
        fn apply_palette(&mut self, palette: &Palette) {
            self.palettes.push(*palette);
        }

        fn apply_title_bar(&mut self, title_bar: &TitleBar) {
            self.title_bars.push(*title_bar);
        }
    }

    pub(super) fn config(temp: &TempDir) -> Config {
        Config {
            data_dir: temp.path().join("data"),
            app_dir: temp.path().join("app"),
        }
    }

    pub(super) fn start_with(
        temp: &TempDir,
        system: Box<dyn SystemTheme>,
    ) -> Shell<RecordingChrome> {
        let config = config(temp);
        let theme = ThemeStore::new(config.settings_path(), system);
        Shell::new(theme, Pages::new(config), RecordingChrome::default())
    }

    pub(super) fn start(temp: &TempDir) -> Shell<RecordingChrome> {
        start_with(temp, Box::new(UnsupportedSystemTheme))
    }

    pub(super) fn write_friends(temp: &TempDir) {
        let path = config(temp).friends_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            path,
            r#"[{"Name":"Alice","Description":"Plays go","ImgUrl":"res/img/alice.png"}]"#,
        )
        .unwrap();
    }

    pub(super) fn current_id(shell: &Shell<RecordingChrome>) -> Option<PageId> {
        shell.current_page().map(Page::id)
    }
}

mod start {
    use super::common::{current_id, start, start_with};
    use super::*;

    #[test]
    fn test_shows_welcome_without_history() {
        let temp = TempDir::new().unwrap();
        let shell = start(&temp);

        assert_eq!(current_id(&shell), Some(PageId::Welcome));
        assert!(!shell.navigator().can_go_back());
    }

    #[test]
    fn test_paints_once_on_start() {
        let temp = TempDir::new().unwrap();
        let shell = start(&temp);

        assert_eq!(shell.chrome().palettes, vec![Palette::new(false, false)]);
        assert_eq!(shell.chrome().title_bars, vec![TitleBar::default()]);
    }

    #[test]
    fn test_welcome_follows_dark_system() {
        let temp = TempDir::new().unwrap();
        let shell = start_with(&temp, Box::new(FixedSystemTheme { dark: true }));

        let Some(Page::Welcome(page)) = shell.current_page() else {
            panic!("expected welcome page");
        };
        assert_eq!(page.theme_class().as_str(), "DarkTheme");
    }
}

mod navigation_buttons {
    use super::common::{current_id, start, write_friends};
    use super::*;

    #[test]
    fn test_known_tag_navigates() {
        let temp = TempDir::new().unwrap();
        let mut shell = start(&temp);

        let outcome = shell.on_navigation_button("SettingsView");

        assert!(outcome.unwrap().is_navigated());
        assert_eq!(current_id(&shell), Some(PageId::Settings));
        assert!(shell.navigator().can_go_back());
    }

    #[test]
    fn test_unknown_tag_is_ignored_but_repaints() {
        let temp = TempDir::new().unwrap();
        let mut shell = start(&temp);

        assert!(shell.on_navigation_button("MoreInfoView").is_none());
        assert_eq!(current_id(&shell), Some(PageId::Welcome));
        assert_eq!(shell.chrome().palettes.len(), 2);
    }

    #[test]
    fn test_friend_page_without_directory_stays_put() {
        let temp = TempDir::new().unwrap();
        let mut shell = start(&temp);

        let outcome = shell.on_navigation_button("FriendView").unwrap();

        assert!(matches!(outcome, NavigationOutcome::Failed(_)));
        assert_eq!(current_id(&shell), Some(PageId::Welcome));
        assert!(!shell.navigator().can_go_back());
    }

    #[test]
    fn test_friend_page_state_survives_round_trip() {
        let temp = TempDir::new().unwrap();
        write_friends(&temp);
        let mut shell = start(&temp);
        let _ = shell.on_navigation_button("FriendView");
        if let Some(Page::Friend(page)) = shell.current_page_mut() {
            page.begin_edit();
            page.set_description_text("Plays chess");
        }

        let _ = shell.on_navigation_button("SettingsView");
        let _ = shell.back();

        let Some(Page::Friend(page)) = shell.current_page() else {
            panic!("expected friend page");
        };
        assert_eq!(page.description_text(), "Plays chess");
    }

    #[test]
    fn test_back_on_empty_history_is_skipped() {
        let temp = TempDir::new().unwrap();
        let mut shell = start(&temp);

        assert!(matches!(
            shell.back(),
            NavigationOutcome::Skipped(Skip::EmptyHistory)
        ));
        assert_eq!(current_id(&shell), Some(PageId::Welcome));
    }
}

mod requests {
    use super::common::{current_id, start};
    use super::*;

    #[test]
    fn test_welcome_more_info_request() {
        let temp = TempDir::new().unwrap();
        let mut shell = start(&temp);
        let Some(Page::Welcome(page)) = shell.current_page() else {
            panic!("expected welcome page");
        };
        let request = page.more_info();

        let outcome = shell.handle(request);

        assert!(matches!(outcome, RequestOutcome::Navigation(o) if o.is_navigated()));
        assert_eq!(current_id(&shell), Some(PageId::MoreInfo));
    }

    #[test]
    fn test_settings_selection_applies_theme() {
        let temp = TempDir::new().unwrap();
        let mut shell = start(&temp);
        let _ = shell.navigate(PageId::Settings);
        let request = match shell.current_page_mut() {
            Some(Page::Settings(page)) => page.select(ThemeChoice::Dark).unwrap(),
            _ => panic!("expected settings page"),
        };

        let outcome = shell.handle(request);

        assert!(matches!(outcome, RequestOutcome::Theme(SaveOutcome::Saved)));
        assert_eq!(shell.theme().effective_theme(), ThemeVariant::Dark);
        assert_eq!(shell.palette().window_background, Color::DARK_BACKGROUND);
    }
}

mod appearance {
    use super::common::start_with;
    use super::*;

    #[test]
    fn test_select_theme_repaints_chrome() {
        let temp = TempDir::new().unwrap();
        let mut shell = start_with(&temp, Box::new(UnsupportedSystemTheme));

        let _ = shell.select_theme(ThemeChoice::Dark);

        let last = shell.chrome().palettes.last().copied().unwrap();
        assert_eq!(last.window_background, Color::DARK_BACKGROUND);
        assert_eq!(last.window_foreground, Color::WHITE);
        assert!(last.nav_buttons().all(|(_, color)| color == Color::WHITE));
    }

    #[test]
    fn test_acrylic_is_transparent_with_system_text() {
        let temp = TempDir::new().unwrap();
        let mut shell = start_with(&temp, Box::new(FixedSystemTheme { dark: true }));

        let _ = shell.select_theme(ThemeChoice::Acrylic);

        let palette = shell.palette();
        assert_eq!(palette.window_background, Color::TRANSPARENT);
        assert_eq!(palette.window_foreground, Color::WHITE);
        assert_eq!(shell.theme().effective_theme(), ThemeVariant::System);
    }

    #[test]
    fn test_select_theme_syncs_open_settings_page() {
        let temp = TempDir::new().unwrap();
        let mut shell = start_with(&temp, Box::new(UnsupportedSystemTheme));
        let _ = shell.navigate(PageId::Settings);

        let _ = shell.toggle_theme();

        let Some(Page::Settings(page)) = shell.current_page() else {
            panic!("expected settings page");
        };
        assert_eq!(page.selected(), ThemeChoice::Dark);
        assert_eq!(page.theme_class().as_str(), "DarkTheme");
    }

    #[test]
    fn test_new_settings_page_reflects_current_choice() {
        let temp = TempDir::new().unwrap();
        let mut shell = start_with(&temp, Box::new(UnsupportedSystemTheme));
        let _ = shell.select_theme(ThemeChoice::Acrylic);

        let _ = shell.navigate(PageId::Settings);

        let Some(Page::Settings(page)) = shell.current_page() else {
            panic!("expected settings page");
        };
        assert_eq!(page.selected(), ThemeChoice::Acrylic);
    }

    #[test]
    fn test_system_change_repaints() {
        let temp = TempDir::new().unwrap();
        let mut shell = start_with(&temp, Box::new(UnsupportedSystemTheme));

        shell.on_system_theme_changed();

        assert_eq!(shell.chrome().palettes.len(), 2);
    }
}

mod title_bar {
    use super::common::start;
    use super::*;

    #[test]
    fn test_inactive_title_is_grey() {
        let temp = TempDir::new().unwrap();
        let mut shell = start(&temp);

        shell.set_active(false);

        assert_eq!(shell.title_bar().title_color(), Color::INACTIVE_TITLE);
        assert_eq!(shell.chrome().title_bars.len(), 2);
    }

    #[test]
    fn test_compact_insets_title() {
        let temp = TempDir::new().unwrap();
        let mut shell = start(&temp);

        shell.set_compact(true);
        assert_eq!(shell.title_bar().left_inset(), COMPACT_INSET);

        shell.set_compact(false);
        assert_eq!(shell.title_bar().left_inset(), 0.0);
    }
}

mod palette {
    use super::*;

    #[test]
    fn test_light_palette() {
        let palette = Palette::new(false, false);
        assert_eq!(palette.window_background, Color::WHITE);
        assert_eq!(palette.window_foreground, Color::BLACK);
        assert_eq!(palette.nav_foreground, Color::BLACK);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::DARK_BACKGROUND.to_string(), "#1E1E1E");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00FFFFFF");
    }

    #[test]
    fn test_nav_button_tags() {
        assert_eq!(NavButton::from_tag("FriendView"), Some(NavButton::Friend));
        assert_eq!(NavButton::from_tag("MoreInfoView"), None);
        assert_eq!(NavButton::Welcome.page(), PageId::Welcome);
    }
}
