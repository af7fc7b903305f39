//! DOM projection: writes sprite boxes onto the page's positioned elements

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{Frame, Sprite};

/// The three positioned elements of the game page
pub struct Stage {
    ball: HtmlElement,
    keepers: [HtmlElement; 2],
}

impl Stage {
    pub const BALL_ID: &'static str = "footBall";
    pub const KEEPER_IDS: [&'static str; 2] = ["goalKeeper1", "goalKeeper2"];

    /// Bind to the page elements; `None` (with an error logged) if any is missing
    pub fn attach(document: &Document) -> Option<Self> {
        let find = |id: &str| -> Option<HtmlElement> {
            let el = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if el.is_none() {
                log::error!("Missing #{id} element");
            }
            el
        };

        Some(Self {
            ball: find(Self::BALL_ID)?,
            keepers: [find(Self::KEEPER_IDS[0])?, find(Self::KEEPER_IDS[1])?],
        })
    }

    pub fn draw(&self, frame: &Frame) {
        apply(&self.ball, &frame.ball);
        for (el, sprite) in self.keepers.iter().zip(&frame.keepers) {
            apply(el, sprite);
        }
    }
}

fn apply(el: &HtmlElement, sprite: &Sprite) {
    let style = el.style();
    for (prop, value) in sprite.css() {
        let _ = style.set_property(prop, &value);
    }
}
