use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Where a revealed element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
    Scale,
    Fade,
}

impl Direction {
    pub fn hidden_class(self) -> &'static str {
        match self {
            Self::Up => "opacity-0 translate-y-12",
            Self::Left => "opacity-0 -translate-x-12",
            Self::Right => "opacity-0 translate-x-12",
            Self::Scale => "opacity-0 scale-0",
            Self::Fade => "opacity-0",
        }
    }
}

const SHOWN_CLASS: &str = "opacity-100 translate-x-0 translate-y-0 scale-100";

/// Delay for the `index`th item of a staggered group.
pub fn stagger_delay_ms(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

/// Animates its children in the first time they scroll into view, then stays put.
#[component]
pub fn Reveal(
    #[prop(optional)] direction: Direction,
    #[prop(optional)] delay_ms: u32,
    #[prop(default = 800)] duration_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_revealed(true);
        }
    });

    let classes = move || {
        let state = if revealed() {
            SHOWN_CLASS
        } else {
            direction.hidden_class()
        };
        format!("transition-all ease-out {state} {class}")
    };
    let style = format!("transition-duration: {duration_ms}ms; transition-delay: {delay_ms}ms");

    view! {
        <div node_ref=target class=classes style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0, 300, 0), 0);
        assert_eq!(stagger_delay_ms(2, 300, 0), 600);
        assert_eq!(stagger_delay_ms(1, 300, 500), 800);
        assert_eq!(stagger_delay_ms(usize::MAX, 300, 10), u32::MAX);
    }

    #[test]
    fn test_hidden_classes_start_transparent() {
        for direction in [
            Direction::Up,
            Direction::Left,
            Direction::Right,
            Direction::Scale,
            Direction::Fade,
        ] {
            assert!(direction.hidden_class().starts_with("opacity-0"));
        }
    }
}
