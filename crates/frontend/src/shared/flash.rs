//! Auto-dismiss of flash banners
//!
//! Called once by the host page after its content is ready. Each selected
//! banner gets its own timer; timers are never cancelled.

use contracts::shared::flash_policy::{category_from_class, FlashCandidate, FlashPolicy};
use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

const NOTIFICATION_SELECTOR: &str = ".alert";
const CONTAINER_SELECTOR: &str = ".container";
const CARD_SELECTOR: &str = ".card-body";
const FORM_SELECTOR: &str = "form";

/// A notification that can be closed later
pub trait DismissibleElement {
    fn describe(&self) -> FlashCandidate;
    /// Close the element after `delay_ms`. Fire-and-forget.
    fn schedule_dismiss(&self, delay_ms: u32);
}

/// Source of notification elements on the page
pub trait ElementFinder {
    type Element: DismissibleElement;

    fn find_notifications(&self) -> Vec<Self::Element>;
}

/// Schedule dismissal for every element the policy selects.
/// Returns how many timers were started.
pub fn init_flash_dismisser<E: DismissibleElement>(
    elements: &[E],
    policy: FlashPolicy,
    delay_ms: u32,
) -> usize {
    let mut scheduled = 0;
    for element in elements {
        if policy.selects(&element.describe()) {
            element.schedule_dismiss(delay_ms);
            scheduled += 1;
        }
    }
    log::debug!(
        "Flash messages: {} of {} scheduled for dismissal in {} ms ({})",
        scheduled,
        elements.len(),
        delay_ms,
        policy.code()
    );
    scheduled
}

/// Find notifications with `finder` and schedule the selected ones
pub fn dismiss_flashes(finder: &impl ElementFinder, policy: FlashPolicy, delay_ms: u32) -> usize {
    let elements = finder.find_notifications();
    init_flash_dismisser(&elements, policy, delay_ms)
}

/// Looks up `.alert` elements in a document
pub struct DocumentFinder {
    document: Document,
}

impl DocumentFinder {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Finder over the current page, if there is one
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl ElementFinder for DocumentFinder {
    type Element = FlashElement;

    fn find_notifications(&self) -> Vec<FlashElement> {
        let nodes = match self.document.query_selector_all(NOTIFICATION_SELECTOR) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::error!("Failed to query flash messages: {:?}", err);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(FlashElement)
            .collect()
    }
}

/// A flash banner in the live DOM
pub struct FlashElement(pub Element);

impl FlashElement {
    fn has_ancestor(&self, selector: &str) -> bool {
        matches!(self.0.closest(selector), Ok(Some(_)))
    }

    fn categories(&self) -> Vec<String> {
        let classes = self.0.class_list();
        (0..classes.length())
            .filter_map(|i| classes.item(i))
            .filter_map(|class| category_from_class(&class).map(str::to_string))
            .collect()
    }
}

impl DismissibleElement for FlashElement {
    fn describe(&self) -> FlashCandidate {
        let in_container = self
            .0
            .parent_element()
            .map(|parent| parent.matches(CONTAINER_SELECTOR).unwrap_or(false))
            .unwrap_or(false);

        FlashCandidate {
            in_container,
            in_card: self.has_ancestor(CARD_SELECTOR),
            in_form: self.has_ancestor(FORM_SELECTOR),
            categories: self.categories(),
        }
    }

    fn schedule_dismiss(&self, delay_ms: u32) {
        let element = self.0.clone();
        Timeout::new(delay_ms, move || {
            if let Err(err) = close_alert(&element) {
                log::error!("Failed to close flash message: {:?}", err);
            }
        })
        .forget();
    }
}

/// `new bootstrap.Alert(element).close()`
fn close_alert(element: &Element) -> Result<(), JsValue> {
    let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return Err(JsValue::from_str("bootstrap is not loaded"));
    }

    let alert_ctor: Function = Reflect::get(&bootstrap, &JsValue::from_str("Alert"))?.dyn_into()?;
    let instance = Reflect::construct(&alert_ctor, &Array::of1(element))?;
    let close: Function = Reflect::get(&instance, &JsValue::from_str("close"))?.dyn_into()?;
    close.call0(&instance)?;
    Ok(())
}
