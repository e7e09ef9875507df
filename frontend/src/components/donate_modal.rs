use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::media::requests::{Ticket, TicketCounter};

/// How long a copy button shows its check mark.
pub const COPY_FEEDBACK_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyField {
    BankName,
    AccountName,
    AccountNumber,
    AccountType,
    SwiftCode,
}

pub struct AccountDetails {
    pub bank_name: &'static str,
    pub account_name: &'static str,
    pub account_number: &'static str,
    pub account_type: &'static str,
    pub swift_code: &'static str,
    pub additional_info: &'static str,
}

pub const ACCOUNT: AccountDetails = AccountDetails {
    bank_name: "Example Bank of Nigeria",
    account_name: "Famkris Healthcare Initiative",
    account_number: "0123456789",
    account_type: "NGN Current Account",
    swift_code: "EXAMPLEXXXX",
    additional_info: "Please include your name or organization in the reference/narration field.",
};

impl CopyField {
    pub const ALL: [CopyField; 5] = [
        CopyField::BankName,
        CopyField::AccountName,
        CopyField::AccountNumber,
        CopyField::AccountType,
        CopyField::SwiftCode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CopyField::BankName => "Bank Name",
            CopyField::AccountName => "Account Name",
            CopyField::AccountNumber => "Account Number",
            CopyField::AccountType => "Account Type",
            CopyField::SwiftCode => "SWIFT Code (International)",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            CopyField::BankName => ACCOUNT.bank_name,
            CopyField::AccountName => ACCOUNT.account_name,
            CopyField::AccountNumber => ACCOUNT.account_number,
            CopyField::AccountType => ACCOUNT.account_type,
            CopyField::SwiftCode => ACCOUNT.swift_code,
        }
    }
}

/// Which field was copied last. Only one check mark is shown at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CopyFeedback {
    copied: Option<(CopyField, Ticket)>,
}

pub enum CopyAction {
    Copied(CopyField, Ticket),
    /// Timer for the copy made with this ticket ran out.
    Expired(Ticket),
}

impl CopyFeedback {
    pub fn is_copied(&self, field: CopyField) -> bool {
        matches!(self.copied, Some((copied, _)) if copied == field)
    }
}

impl Reducible for CopyFeedback {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CopyAction::Copied(field, ticket) => Rc::new(CopyFeedback {
                copied: Some((field, ticket)),
            }),
            CopyAction::Expired(ticket) => match self.copied {
                Some((_, current)) if current == ticket => Rc::new(CopyFeedback::default()),
                _ => self,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DonateModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(DonateModal)]
pub fn donate_modal(props: &DonateModalProps) -> Html {
    let feedback = use_reducer(CopyFeedback::default);
    let tickets = use_mut_ref(TicketCounter::default);
    let clipboard = use_clipboard();

    if !props.is_open {
        return html! {};
    }

    let copy = {
        let feedback = feedback.clone();
        move |field: CopyField| {
            let feedback = feedback.clone();
            let tickets = tickets.clone();
            let clipboard = clipboard.clone();
            Callback::from(move |_: MouseEvent| {
                clipboard.write_text(field.value().to_string());
                let ticket = tickets.borrow_mut().issue();
                feedback.dispatch(CopyAction::Copied(field, ticket));
                info!("Copied {} to clipboard", field.label());

                let dispatcher = feedback.dispatcher();
                Timeout::new(COPY_FEEDBACK_MS, move || {
                    dispatcher.dispatch(CopyAction::Expired(ticket));
                })
                .forget();
            })
        }
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="donate-backdrop" onclick={close.clone()}>
            <div class="donate-dialog" role="dialog" aria-modal="true" onclick={stop}>
                <button class="donate-close" aria-label="Close" onclick={close.clone()}>{"×"}</button>
                <div class="donate-header">
                    <div class="donate-icon">{"$"}</div>
                    <h2>{"Support Our Mission"}</h2>
                    <p>{"Your donation helps us continue making a difference"}</p>
                </div>

                <div class="donate-fields">
                    {
                        for CopyField::ALL.into_iter().map(|field| html! {
                            <div class="donate-field" key={field.label()}>
                                <div class="donate-field-header">
                                    <span class="donate-field-label">{ field.label() }</span>
                                    <button
                                        class="donate-copy"
                                        aria-label={format!("Copy {}", field.label())}
                                        onclick={copy(field)}
                                    >
                                        { if feedback.is_copied(field) { "✓" } else { "⧉" } }
                                    </button>
                                </div>
                                <p class={classes!("donate-field-value", (field == CopyField::AccountNumber).then(|| "large"))}>
                                    { field.value() }
                                </p>
                            </div>
                        })
                    }
                </div>

                <div class="donate-note">
                    <p><span class="donate-note-label">{"Note:"}</span>{" "}{ ACCOUNT.additional_info }</p>
                </div>

                <button class="donate-done" onclick={close}>{"Close"}</button>
                <p class="donate-thanks">{"Thank you for your generous support! 💚"}</p>
            </div>
            <style>
                {r#"
                .donate-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    animation: fadeIn 0.2s ease-out;
                }
                .donate-dialog {
                    position: relative;
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    max-width: 28rem;
                    width: 100%;
                    padding: 2rem;
                    animation: popIn 0.3s ease-out;
                }
                .donate-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #6b7280;
                    cursor: pointer;
                }
                .donate-header {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .donate-icon {
                    margin: 0 auto 1rem;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: #dcfce7;
                    color: #16a34a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    font-weight: bold;
                }
                .donate-header h2 {
                    font-size: 1.875rem;
                    color: #1f2937;
                    margin-bottom: 0.5rem;
                }
                .donate-header p {
                    color: #4b5563;
                }
                .donate-field {
                    background: #f9fafb;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    margin-bottom: 1rem;
                }
                .donate-field-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 0.5rem;
                }
                .donate-field-label {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #374151;
                }
                .donate-copy {
                    background: none;
                    border: none;
                    color: #16a34a;
                    cursor: pointer;
                }
                .donate-field-value {
                    color: #111827;
                    font-weight: 500;
                }
                .donate-field-value.large {
                    font-size: 1.25rem;
                }
                .donate-note {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.875rem;
                    color: #166534;
                }
                .donate-note-label {
                    font-weight: 600;
                }
                .donate-done {
                    width: 100%;
                    background: #16a34a;
                    color: #fff;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .donate-done:hover {
                    background: #15803d;
                }
                .donate-thanks {
                    text-align: center;
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-top: 1rem;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes popIn {
                    from { transform: scale(0.9); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_copy_replaces_check_mark_and_survives_stale_timer() {
        let mut tickets = TicketCounter::default();
        let a = tickets.issue();
        let b = tickets.issue();

        let state = Rc::new(CopyFeedback::default())
            .reduce(CopyAction::Copied(CopyField::BankName, a))
            .reduce(CopyAction::Copied(CopyField::AccountNumber, b));
        assert!(state.is_copied(CopyField::AccountNumber));
        assert!(!state.is_copied(CopyField::BankName));

        let state = state.reduce(CopyAction::Expired(a));
        assert!(state.is_copied(CopyField::AccountNumber));

        let state = state.reduce(CopyAction::Expired(b));
        assert!(CopyField::ALL.iter().all(|f| !state.is_copied(*f)));
    }

    #[test]
    fn copying_the_same_field_again_extends_the_window() {
        let mut tickets = TicketCounter::default();
        let first = tickets.issue();
        let second = tickets.issue();

        let state = Rc::new(CopyFeedback::default())
            .reduce(CopyAction::Copied(CopyField::SwiftCode, first))
            .reduce(CopyAction::Copied(CopyField::SwiftCode, second))
            .reduce(CopyAction::Expired(first));
        assert!(state.is_copied(CopyField::SwiftCode));
    }

    #[test]
    fn every_field_has_a_value() {
        for field in CopyField::ALL {
            assert!(!field.value().is_empty(), "{}", field.label());
        }
    }
}
