//! Update function for the customer table.
//!
//! Every store action goes through `CustomerBook::apply`; the effects it
//! returns are run here. Network effects are spawned on the local executor
//! and answer with a new `Msg::Store` once the request completes. Failures
//! are written to the browser console and nothing else.

use std::rc::Rc;

use common::api::CustomerApi;
use common::error::{FailureCause, OperationFailed};
use common::graphql::Operation;
use common::store::{Action, Effect};
use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use crate::api::{Api, HttpTransport};

use super::messages::Msg;
use super::state::CustomerTable;

pub fn update(component: &mut CustomerTable, ctx: &Context<CustomerTable>, msg: Msg) -> bool {
    match msg {
        Msg::Configured(Ok(config)) => {
            let transport = HttpTransport::new(config);
            log!("Using GraphQL endpoint", transport.endpoint().to_string());
            component.api = Some(Rc::new(CustomerApi::new(transport)));

            ctx.link().send_message(Msg::Store(Action::Load));
            false
        }
        Msg::Configured(Err(err)) => {
            error!("Error loading configuration:", err);
            false
        }
        Msg::Store(action) => {
            for effect in component.book.apply(action) {
                run_effect(component.api.clone(), ctx.link().clone(), effect);
            }
            true
        }
    }
}

fn run_effect(api: Option<Rc<Api>>, link: Scope<CustomerTable>, effect: Effect) {
    if let Effect::Report(failure) = effect {
        error!("Customer operation failed:", failure.to_string());
        return;
    }

    let Some(api) = api else {
        link.send_message(Msg::Store(unconfigured(effect)));
        return;
    };

    spawn_local(async move {
        let action = match effect {
            Effect::List => Action::Loaded(api.list().await),
            Effect::Create(fields) => Action::Created(api.create(&fields).await.map(|_| ())),
            Effect::Update(input) => {
                let result = api.update(&input).await.map(|_| ());
                Action::Updated(input.id, result)
            }
            Effect::Delete(id) => Action::Deleted(api.delete(&id).await.map(|_| ())),
            Effect::Report(_) => return,
        };
        link.send_message(Msg::Store(action));
    });
}

/// The failure answer for an effect requested before the endpoint is known.
fn unconfigured(effect: Effect) -> Action {
    let failed = |operation: Operation| OperationFailed::new(operation, FailureCause::NotConfigured);

    match effect {
        Effect::Create(_) => Action::Created(Err(failed(Operation::CreateCustomers))),
        Effect::Update(input) => Action::Updated(input.id, Err(failed(Operation::UpdateCustomers))),
        Effect::Delete(_) => Action::Deleted(Err(failed(Operation::DeleteCustomers))),
        Effect::List | Effect::Report(_) => {
            Action::Loaded(Err(failed(Operation::ListCustomers)))
        }
    }
}
