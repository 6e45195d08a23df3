//! Key and pointer events to shell actions

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_engine::Action;

use super::hit_map::{HitMap, HitTarget};
use crate::presentation::view_models::ShellViewModel;

const PAGE: u16 = 10;
const WHEEL: u16 = 3;

/// What an input event asks the renderer to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Apply(Action),
    Scroll(Scroll),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up(u16),
    Down(u16),
    Top,
    Bottom,
}

/// Cmd on macOS (Ctrl too, since most terminals swallow Cmd), Ctrl elsewhere
pub fn has_platform_modifier(modifiers: KeyModifiers) -> bool {
    if cfg!(target_os = "macos") {
        modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::CONTROL)
    } else {
        modifiers.contains(KeyModifiers::CONTROL)
    }
}

pub fn is_palette_shortcut(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('p') | KeyCode::Char('P'))
        && has_platform_modifier(key.modifiers)
}

pub fn map_key(key: KeyEvent, model: &ShellViewModel) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Intent::Apply(Action::Quit));
    }

    if model.intro.is_some() {
        return Some(Intent::Apply(Action::DismissIntro));
    }

    if is_palette_shortcut(&key) {
        return Some(Intent::Apply(Action::ShowPalette));
    }

    if model.palette.is_some() {
        return map_palette_key(key).map(Intent::Apply);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let intent = match key.code {
        KeyCode::Char('w') if ctrl => Intent::Apply(Action::CloseActiveTab),
        KeyCode::Char('q') => Intent::Apply(Action::Quit),
        KeyCode::Char('b') => Intent::Apply(Action::ToggleSidebar),
        KeyCode::Tab => Intent::Apply(Action::NextTab),
        KeyCode::BackTab => Intent::Apply(Action::PreviousTab),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            let link = model.document.quick_open.get(index)?;
            Intent::Apply(Action::OpenDocument(link.target.clone()))
        }
        KeyCode::Up | KeyCode::Char('k') => Intent::Scroll(Scroll::Up(1)),
        KeyCode::Down | KeyCode::Char('j') => Intent::Scroll(Scroll::Down(1)),
        KeyCode::PageUp => Intent::Scroll(Scroll::Up(PAGE)),
        KeyCode::PageDown | KeyCode::Char(' ') => Intent::Scroll(Scroll::Down(PAGE)),
        KeyCode::Home | KeyCode::Char('g') => Intent::Scroll(Scroll::Top),
        KeyCode::End | KeyCode::Char('G') => Intent::Scroll(Scroll::Bottom),
        _ => return None,
    };
    Some(intent)
}

fn map_palette_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::DismissPalette),
        KeyCode::Enter => Some(Action::ConfirmPalette),
        KeyCode::Backspace => Some(Action::PaletteBackspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(Action::PaletteInput(c))
        }
        _ => None,
    }
}

pub fn map_mouse(mouse: MouseEvent, hits: &HitMap) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let action = match hits.target_at(mouse.column, mouse.row)? {
                HitTarget::TitleSearch => Action::ShowPalette,
                HitTarget::Explorer(id) | HitTarget::QuickOpen(id) => {
                    Action::OpenDocument(id.clone())
                }
                HitTarget::Tab(id) => Action::SelectTab(id.clone()),
                HitTarget::CloseTab(id) => Action::CloseTab(id.clone()),
                HitTarget::PaletteResult(index) => Action::PickPaletteResult(*index),
                HitTarget::PalettePanel => return None,
                HitTarget::PaletteBackdrop => Action::DismissPalette,
                HitTarget::Intro => Action::DismissIntro,
            };
            Some(Intent::Apply(action))
        }
        MouseEventKind::ScrollUp => Some(Intent::Scroll(Scroll::Up(WHEEL))),
        MouseEventKind::ScrollDown => Some(Intent::Scroll(Scroll::Down(WHEEL))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{ShellChrome, present_shell};
    use folio_content::ContentStore;
    use folio_engine::{Shell, ShellOptions};
    use folio_types::{DocumentId, Skin};
    use ratatui::layout::Rect;
    use std::time::{Duration, Instant};

    fn model_with(options: ShellOptions, actions: &[Action]) -> ShellViewModel {
        let store = ContentStore::builtin(Skin::Classic).unwrap();
        let mut shell = Shell::new(
            store.registry().to_vec(),
            store.home().clone(),
            options,
            Instant::now(),
        );
        for action in actions {
            shell.apply(action.clone());
        }
        present_shell(&shell, &store, ShellChrome::default())
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn apply(action: Action) -> Option<Intent> {
        Some(Intent::Apply(action))
    }

    #[test]
    fn test_ctrl_p_opens_palette_everywhere() {
        let model = model_with(ShellOptions::default(), &[]);
        let ctrl_p = key(KeyCode::Char('p'), KeyModifiers::CONTROL);

        assert!(is_palette_shortcut(&ctrl_p));
        assert_eq!(map_key(ctrl_p, &model), apply(Action::ShowPalette));
        assert!(!is_palette_shortcut(&key(KeyCode::Char('p'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_palette_captures_typing() {
        let model = model_with(ShellOptions::default(), &[Action::ShowPalette]);

        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::NONE), &model),
            apply(Action::PaletteInput('q'))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('R'), KeyModifiers::SHIFT), &model),
            apply(Action::PaletteInput('R'))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter, KeyModifiers::NONE), &model),
            apply(Action::ConfirmPalette)
        );
        assert_eq!(
            map_key(key(KeyCode::Esc, KeyModifiers::NONE), &model),
            apply(Action::DismissPalette)
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace, KeyModifiers::NONE), &model),
            apply(Action::PaletteBackspace)
        );
    }

    #[test]
    fn test_editor_keys_when_palette_hidden() {
        let model = model_with(ShellOptions::default(), &[]);

        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::NONE), &model),
            apply(Action::Quit)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('w'), KeyModifiers::CONTROL), &model),
            apply(Action::CloseActiveTab)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('3'), KeyModifiers::NONE), &model),
            apply(Action::OpenDocument(DocumentId::new("intern.md")))
        );
        assert_eq!(map_key(key(KeyCode::Char('9'), KeyModifiers::NONE), &model), None);
        assert_eq!(
            map_key(key(KeyCode::PageDown, KeyModifiers::NONE), &model),
            Some(Intent::Scroll(Scroll::Down(PAGE)))
        );
    }

    #[test]
    fn test_quick_open_digits_only_on_readme() {
        let model = model_with(
            ShellOptions::default(),
            &[Action::OpenDocument(DocumentId::new("projects.md"))],
        );
        assert_eq!(map_key(key(KeyCode::Char('1'), KeyModifiers::NONE), &model), None);
    }

    #[test]
    fn test_intro_swallows_any_key_but_ctrl_c() {
        let options = ShellOptions {
            collapsible_sidebar: false,
            intro_delay: Some(Duration::from_secs(5)),
        };
        let model = model_with(options, &[]);

        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::NONE), &model),
            apply(Action::DismissIntro)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &model),
            apply(Action::Quit)
        );
    }

    #[test]
    fn test_mouse_uses_topmost_region() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 20, 10), HitTarget::PaletteBackdrop);
        hits.push(Rect::new(5, 2, 10, 1), HitTarget::PaletteResult(0));

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(map_mouse(click(6, 2), &hits), apply(Action::PickPaletteResult(0)));
        assert_eq!(map_mouse(click(1, 8), &hits), apply(Action::DismissPalette));
        assert_eq!(map_mouse(click(30, 30), &hits), None);

        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..click(0, 0)
        };
        assert_eq!(map_mouse(wheel, &hits), Some(Intent::Scroll(Scroll::Down(WHEEL))));
    }
}
