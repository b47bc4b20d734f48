use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-content">
                <h1>{props.title}</h1>
                { for props.children.iter() }
                <p class="legal-back">
                    <Link<Route> to={Route::Home}>{"← Back to CapitalNodes"}</Link<Route>>
                </p>
            </div>
            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 4rem;
                    background: linear-gradient(135deg, #eef2ff 0%, #faf5ff 100%);
                    color: #111827;
                }

                .legal-content {
                    max-width: 768px;
                    margin: 0 auto;
                    background: #fff;
                    border-radius: 16px;
                    padding: 3rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .legal-content h1 {
                    font-size: 2.25rem;
                    margin-bottom: 1.5rem;
                }

                .legal-content h2 {
                    font-size: 1.4rem;
                    margin: 2rem 0 0.75rem;
                }

                .legal-content p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }

                .legal-back {
                    margin-top: 2.5rem;
                }

                .legal-back a {
                    color: #4f46e5;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage title="Terms of Service">
            <p>{"CapitalNodes provides curated information about early-stage crypto investment opportunities. Membership gives you access to deal research, whitelist notifications, and analysis published on this site."}</p>
            <h2>{"No investment advice"}</h2>
            <p>{"Nothing on this site is financial, legal, or tax advice. Early-stage crypto investments are speculative and can lose their entire value. Do your own research and only invest what you can afford to lose."}</p>
            <h2>{"Eligibility"}</h2>
            <p>{"Some opportunities referenced on the platform are restricted to accredited investors or to residents of specific jurisdictions. You are responsible for confirming that you may legally participate in any deal before doing so."}</p>
            <h2>{"Accounts and conduct"}</h2>
            <p>{"Sharing member-only research outside the platform, scraping, or reselling access is grounds for termination without refund."}</p>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <p>{"This site does not set cookies, run analytics, or send any data to a server. Everything you see is rendered in your browser."}</p>
            <h2>{"What we collect"}</h2>
            <p>{"Nothing. The landing page has no forms, no tracking pixels, and no backend. If you email us, we see your email address and whatever you write, and we use it only to reply."}</p>
            <h2>{"Third parties"}</h2>
            <p>{"We do not share or sell any information to third parties, because we do not hold any."}</p>
        </LegalPage>
    }
}
