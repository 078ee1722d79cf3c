use crate::models::call_log::CallLogRecord;
use std::rc::Rc;
use yew::prelude::*;

const HEADERS: [&str; 6] = ["Date", "Carrier", "Route", "Negotiation", "Status", "Final Rate"];

#[derive(Properties, PartialEq)]
pub struct CallTableProps {
    pub logs: Rc<Vec<CallLogRecord>>,
}

/// Call log rows in the order the backend returned them.
#[function_component(CallTable)]
pub fn call_table(props: &CallTableProps) -> Html {
    html! {
        <div class="call-table">
            <div class="call-table-header">
                <h2>{"Recent Call Logs"}</h2>
            </div>
            <div class="call-table-scroll">
                <table>
                    <thead>
                        <tr>
                            { for HEADERS.iter().map(|header| html! { <th key={*header}>{*header}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        if props.logs.is_empty() {
                            <tr class="call-table-empty">
                                <td colspan={HEADERS.len().to_string()}>{"No calls recorded yet"}</td>
                            </tr>
                        } else {
                            { for props.logs.iter().map(call_row) }
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn call_row(record: &CallLogRecord) -> Html {
    let status = record.status();

    html! {
        <tr key={record.run_id.clone()}>
            <td class="cell-date">{record.local_date_label()}</td>
            <td class="cell-carrier">
                <div class="carrier-name">{record.carrier_label()}</div>
                if let Some(mc) = &record.mc_number {
                    <div class="cell-secondary">{mc}</div>
                }
            </td>
            <td class="cell-route">
                <div>{record.route_label()}</div>
                if let Some(equipment) = &record.equipment_type {
                    <div class="cell-secondary">{equipment}</div>
                }
            </td>
            <td class="cell-turns">
                <span class="turns-pill">{record.turns_label()}</span>
            </td>
            <td class="cell-status">
                <span class={status.css_class()}>{status.label()}</span>
                if record.was_transferred {
                    <span class="status-badge status-transferred">{"Transferred"}</span>
                }
                if let Some(sentiment) = record.sentiment_label() {
                    <div class="cell-secondary sentiment-label">{sentiment}</div>
                }
            </td>
            <td class="cell-amount">{record.amount_label()}</td>
        </tr>
    }
}
