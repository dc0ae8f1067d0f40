mod account;
mod login;
mod not_found;
mod otp;

pub(crate) use account::AccountPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use otp::OtpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const OTP: &str = "/otp";
    pub const ACCOUNT: &str = "/account";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/otp") view=OtpPage />
            <Route path=path!("/account") view=AccountPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
