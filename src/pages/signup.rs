//! Signup page: registers a `user` account, then sends the visitor to login.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppApi;
use crate::net::types::SignupRequest;
use crate::router::RouteName;

pub(crate) fn validate_signup_input(input: &SignupRequest) -> Result<SignupRequest, &'static str> {
    let cleaned = SignupRequest {
        email: input.email.trim().to_owned(),
        password: input.password.clone(),
        fullname: input.fullname.trim().to_owned(),
        address: input.address.trim().to_owned(),
        pincode: input.pincode.trim().to_owned(),
    };
    let missing = [&cleaned.email, &cleaned.password, &cleaned.fullname, &cleaned.address, &cleaned.pincode]
        .iter()
        .any(|v| v.is_empty());
    if missing {
        return Err("All fields are required.");
    }
    Ok(cleaned)
}

fn form_input(
    form: RwSignal<SignupRequest>,
    label: &'static str,
    kind: &'static str,
    get: fn(&SignupRequest) -> String,
    set: fn(&mut SignupRequest, String),
) -> impl IntoView {
    view! {
        <input
            class="login-input"
            type=kind
            placeholder=label
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let api = expect_context::<AppApi>();
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let navigate = use_navigate();

    let form = RwSignal::new(SignupRequest::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup_input(&form.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.signup(&request).await {
                    Ok(_) => navigate(RouteName::Login.path(), leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        info.set(format!("Signup failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Parking"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    {form_input(form, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {form_input(form, "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {form_input(form, "Full name", "text", |f| f.fullname.clone(), |f, v| f.fullname = v)}
                    {form_input(form, "Address", "text", |f| f.address.clone(), |f, v| f.address = v)}
                    {form_input(form, "Pincode", "text", |f| f.pincode.clone(), |f, v| f.pincode = v)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=RouteName::Login.path()>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
