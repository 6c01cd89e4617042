use dioxus::prelude::*;
use std::rc::Rc;

/// Visibility trigger settings, mirroring IntersectionObserverInit
#[derive(Clone, Debug, PartialEq)]
pub struct InViewOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl InViewOptions {
    pub fn from_settings() -> Self {
        let settings = crate::stores::settings_store::peek_settings();
        Self {
            threshold: settings.reveal_threshold,
            root_margin: settings.reveal_root_margin,
        }
    }

    /// An entry counts as visible once it intersects by at least `threshold`
    pub fn is_in_view(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.threshold
    }
}

/// One-way latch: flips on the first intersecting notification and stays set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Record one observer notification. Returns true only on the flip.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Keeps the observer and its JS callback alive; disconnects on drop
#[cfg(target_family = "wasm")]
pub struct ObserverGuard {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_family = "wasm")]
impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(not(target_family = "wasm"))]
pub struct ObserverGuard;

/// Handle returned by [`use_in_view`]
#[derive(Clone, Copy)]
pub struct UseInView {
    revealed: Signal<bool>,
    options: Signal<InViewOptions>,
    guard: Signal<Option<ObserverGuard>>,
}

/// Trigger-once viewport visibility for a single element
///
/// Attach the returned handle to the element's `onmounted` event. The
/// `revealed` flag turns true the first time the element intersects the
/// viewport and never goes back, so callers can derive classes from it.
///
/// # Example
/// ```
/// let mut in_view = use_in_view(InViewOptions::from_settings);
///
/// rsx! {
///     div {
///         class: if in_view.revealed() { "opacity-100" } else { "opacity-0" },
///         onmounted: move |evt| in_view.attach(evt.data()),
///     }
/// }
/// ```
pub fn use_in_view(init: impl FnOnce() -> InViewOptions) -> UseInView {
    let revealed = use_signal(|| false);
    let options = use_signal(init);
    let guard = use_signal(|| None::<ObserverGuard>);

    UseInView {
        revealed,
        options,
        guard,
    }
}

impl UseInView {
    pub fn revealed(&self) -> bool {
        *self.revealed.read()
    }

    /// Start observing the mounted element, once
    pub fn attach(&mut self, mounted: Rc<MountedData>) {
        if *self.revealed.peek() || self.guard.peek().is_some() {
            return;
        }

        #[cfg(target_family = "wasm")]
        {
            let Some(element) = mounted.downcast::<web_sys::Element>() else {
                log::warn!("Mounted node is not a DOM element, revealing immediately");
                self.revealed.set(true);
                return;
            };

            let options = self.options.peek().clone();
            match observe_once(element, &options, self.revealed) {
                Ok(guard) => self.guard.set(Some(guard)),
                Err(e) => {
                    log::error!("Failed to create IntersectionObserver: {}", e);
                    self.revealed.set(true);
                }
            }
        }

        #[cfg(not(target_family = "wasm"))]
        {
            // No viewport to observe outside the browser
            let _ = (mounted, self.options);
            self.guard.set(Some(ObserverGuard));
            self.revealed.set(true);
        }
    }
}

#[cfg(target_family = "wasm")]
fn observe_once(
    element: &web_sys::Element,
    options: &InViewOptions,
    mut revealed: Signal<bool>,
) -> Result<ObserverGuard, String> {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let mut latch = RevealLatch::default();
    let trigger = options.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let in_view = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .any(|entry| trigger.is_in_view(entry.is_intersecting(), entry.intersection_ratio()));

            if latch.observe(in_view) {
                revealed.set(true);
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )
    .map_err(|e| format!("{:?}", e))?;

    observer.observe(element);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // Scrolling back out (or in again) changes nothing
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_partial_overlap_waits_for_threshold() {
        let options = InViewOptions {
            threshold: 0.1,
            root_margin: "0px".to_string(),
        };
        let mut latch = RevealLatch::default();

        // Peeking in by a sliver is intersecting but below the threshold
        assert!(!options.is_in_view(true, 0.02));
        assert!(!latch.observe(options.is_in_view(true, 0.02)));
        assert!(!latch.is_revealed());

        assert!(options.is_in_view(true, 0.1));
        assert!(latch.observe(options.is_in_view(true, 0.35)));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_not_intersecting_is_never_in_view() {
        let options = InViewOptions {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        };
        assert!(options.is_in_view(true, 0.0));
        assert!(!options.is_in_view(false, 0.0));
        assert!(!options.is_in_view(false, 1.0));
    }
}
