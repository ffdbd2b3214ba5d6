use super::ctx::{StartCtx, TickCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by game code.
pub trait App {
    /// Called once before the first tick.
    fn on_start(&mut self, ctx: &StartCtx) {
        let _ = ctx;
    }

    /// Called once per fixed update step.
    fn on_tick(&mut self, ctx: &mut TickCtx) -> AppControl;
}

impl<A: App + ?Sized> App for &mut A {
    fn on_start(&mut self, ctx: &StartCtx) {
        (**self).on_start(ctx);
    }

    fn on_tick(&mut self, ctx: &mut TickCtx) -> AppControl {
        (**self).on_tick(ctx)
    }
}
