use dioxus::prelude::*;
use gloo_storage::{SessionStorage, Storage};

/// Mentee last opened from the roster, read by the dashboard
pub static SELECTED_MENTEE: GlobalSignal<Option<String>> = Signal::global(|| None);

const STORAGE_KEY: &str = "menteeboard_selected_mentee";

/// Restore the selection kept in sessionStorage (survives reloads, not new tabs)
pub fn init_selection() {
    if let Ok(id) = SessionStorage::get::<String>(STORAGE_KEY) {
        if !id.is_empty() {
            log::debug!("Restored selected mentee {}", id);
            *SELECTED_MENTEE.write() = Some(id);
        }
    }
}

/// Select `mentee_id`. Reads without subscribing, so effects may call this freely.
pub fn select_mentee(mentee_id: &str) {
    if SELECTED_MENTEE.peek().as_deref() == Some(mentee_id) {
        return;
    }

    *SELECTED_MENTEE.write() = Some(mentee_id.to_string());
    persist(Some(mentee_id));
}

pub fn clear_selection() {
    *SELECTED_MENTEE.write() = None;
    persist(None);
}

/// Current selection without subscribing the caller
pub fn peek_selected_mentee() -> Option<String> {
    SELECTED_MENTEE.peek().clone()
}

fn persist(mentee_id: Option<&str>) {
    #[cfg(target_family = "wasm")]
    match mentee_id {
        Some(id) => {
            if let Err(e) = SessionStorage::set(STORAGE_KEY, id) {
                log::warn!("Failed to persist selected mentee: {}", e);
            }
        }
        None => SessionStorage::delete(STORAGE_KEY),
    }

    #[cfg(not(target_family = "wasm"))]
    let _ = mentee_id;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..3 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(50)) => {}
            };
        }
    }

    #[tokio::test]
    async fn test_url_sync_effect_runs_once() {
        let runs = Rc::new(RefCell::new(0usize));
        let mut dom = VirtualDom::new_with_props(
            |runs: Rc<RefCell<usize>>| {
                let mentee_id = "A1".to_string();
                use_effect(use_reactive(&mentee_id, move |id| {
                    *runs.borrow_mut() += 1;
                    select_mentee(&id);
                }));
                rsx! { div {} }
            },
            runs.clone(),
        );

        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(*runs.borrow(), 1);
        assert_eq!(dom.in_runtime(peek_selected_mentee), Some("A1".to_string()));

        // Signing out clears the selection without waking the effect
        dom.in_runtime(clear_selection);
        settle(&mut dom).await;
        assert_eq!(*runs.borrow(), 1);
        assert_eq!(dom.in_runtime(peek_selected_mentee), None);
    }

    #[test]
    fn test_select_is_idempotent() {
        let dom = VirtualDom::new(|| rsx! { div {} });
        dom.in_runtime(|| {
            select_mentee("A1");
            select_mentee("A1");
            assert_eq!(peek_selected_mentee(), Some("A1".to_string()));

            select_mentee("B2");
            assert_eq!(peek_selected_mentee(), Some("B2".to_string()));

            clear_selection();
            assert_eq!(peek_selected_mentee(), None);
        });
    }
}
