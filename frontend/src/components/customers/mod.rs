//! Customer table: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export the component and its message/props types.
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, fetch the endpoint configuration; once it arrives the
//!   update loop issues the initial list fetch.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CustomerTableProps;
pub use state::CustomerTable;

impl Component for CustomerTable {
    type Message = Msg;
    type Properties = CustomerTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CustomerTable::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let path = ctx.props().config_path.clone();
            spawn_local(async move {
                let config = crate::config::load(&path).await;
                link.send_message(Msg::Configured(config));
            });
        }
    }
}
