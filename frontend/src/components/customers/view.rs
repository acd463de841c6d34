//! View rendering for the customer table.
//!
//! A create form sits above a three-column table. Each customer row carries
//! Delete and Edit buttons; the row being edited is followed by an inline
//! editor row with two inputs and an Update button. There is no loading or
//! error display: failures only reach the console.

use common::model::customer::{Customer, CustomerFields, Field};
use common::store::{Action, Row, Selection};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CustomerTable;

pub fn view(component: &CustomerTable, ctx: &Context<CustomerTable>) -> Html {
    let link = ctx.link();

    html! {
        <div class="customers-root">
            <h1>{"Customer List"}</h1>
            { build_create_form(component.book.draft(), link) }
            <table>
                <thead>
                    <tr>
                        <th>{ Field::FirstName.label() }</th>
                        <th>{ Field::LastName.label() }</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for component.book.rows().map(|row| build_row(row, link)) }
                </tbody>
            </table>
        </div>
    }
}

fn build_create_form(draft: &CustomerFields, link: &Scope<CustomerTable>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Store(Action::SubmitDraft)
    });

    html! {
        <form {onsubmit}>
            {
                for Field::ALL.into_iter().map(|field| html! {
                    <input
                        type="text"
                        name={field.name()}
                        placeholder={field.label()}
                        required={true}
                        value={draft.get(field).to_string()}
                        oninput={input_callback(link, move |value| Action::EditDraft(field, value))}
                    />
                })
            }
            <button type="submit">{"Add Customer"}</button>
        </form>
    }
}

fn build_row(row: Row<'_>, link: &Scope<CustomerTable>) -> Html {
    match row {
        Row::Customer(customer) => build_customer_row(customer, link),
        Row::Editor(selection) => build_editor_row(selection, link),
    }
}

fn build_customer_row(customer: &Customer, link: &Scope<CustomerTable>) -> Html {
    let delete_id = customer.id.clone();
    let select_id = customer.id.clone();

    html! {
        <tr key={customer.id.to_string()}>
            <td>{ customer.first_name.clone() }</td>
            <td>{ customer.last_name.clone() }</td>
            <td>
                <button onclick={link.callback(move |_| Msg::Store(Action::Delete(delete_id.clone())))}>
                    {"Delete"}
                </button>
                <button onclick={link.callback(move |_| Msg::Store(Action::Select(select_id.clone())))}>
                    {"Edit"}
                </button>
            </td>
        </tr>
    }
}

fn build_editor_row(selection: &Selection, link: &Scope<CustomerTable>) -> Html {
    html! {
        <tr key={format!("{}-edit", selection.id)}>
            {
                for Field::ALL.into_iter().map(|field| html! {
                    <td>
                        <input
                            type="text"
                            name={field.name()}
                            value={selection.fields.get(field).to_string()}
                            oninput={input_callback(link, move |value| Action::EditSelected(field, value))}
                        />
                    </td>
                })
            }
            <td>
                <button onclick={link.callback(|_| Msg::Store(Action::CommitEdit))}>
                    {"Update"}
                </button>
            </td>
        </tr>
    }
}

/// Builds an `oninput` callback that forwards the input's value as a store action.
fn input_callback(
    link: &Scope<CustomerTable>,
    action: impl Fn(String) -> Action + 'static,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Store(action(input.value()))
    })
}
