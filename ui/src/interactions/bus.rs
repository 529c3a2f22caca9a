use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleFavorite {
    pub shift_title: String,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFavorite {
    pub shift_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectShift {
    pub shift_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowTimeline {
    pub turnus_set_id: i64,
    pub shift_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Toggle(ToggleFavorite),
    Remove(RemoveFavorite),
    Select(SelectShift),
    Timeline(ShowTimeline),
}

type Handler<T> = Rc<dyn Fn(T)>;

/// One handler slot per interaction kind. Registering again replaces the
/// previous handler.
#[derive(Clone, Default)]
pub struct InteractionBus {
    toggle: Option<Handler<ToggleFavorite>>,
    remove: Option<Handler<RemoveFavorite>>,
    select: Option<Handler<SelectShift>>,
    timeline: Option<Handler<ShowTimeline>>,
}

impl InteractionBus {
    pub fn on_toggle(mut self, handler: impl Fn(ToggleFavorite) + 'static) -> Self {
        self.toggle = Some(Rc::new(handler));
        self
    }

    pub fn on_remove(mut self, handler: impl Fn(RemoveFavorite) + 'static) -> Self {
        self.remove = Some(Rc::new(handler));
        self
    }

    pub fn on_select(mut self, handler: impl Fn(SelectShift) + 'static) -> Self {
        self.select = Some(Rc::new(handler));
        self
    }

    pub fn on_timeline(mut self, handler: impl Fn(ShowTimeline) + 'static) -> Self {
        self.timeline = Some(Rc::new(handler));
        self
    }

    /// Route `interaction` to its handler. Returns `false` when nothing is
    /// registered for that kind.
    pub fn dispatch(&self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::Toggle(event) => call(&self.toggle, event),
            Interaction::Remove(event) => call(&self.remove, event),
            Interaction::Select(event) => call(&self.select, event),
            Interaction::Timeline(event) => call(&self.timeline, event),
        }
    }
}

fn call<T: std::fmt::Debug>(handler: &Option<Handler<T>>, event: T) -> bool {
    match handler {
        Some(handler) => {
            handler(event);
            true
        }
        None => {
            tracing::debug!(?event, "no handler registered");
            false
        }
    }
}
