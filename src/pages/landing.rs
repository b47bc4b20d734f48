use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::nav_button::NavButton;
use crate::components::timeline::InvestmentTimeline;
use crate::Route;

const USPS: [&str; 4] = [
    "Access to early-stage investments & pre-sales",
    "Exclusive whitelists and private rounds",
    "Daily VC deal updates and in-depth analysis",
    "Direct insights from industry insiders",
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "👁️",
        title: "Exclusive Intel",
        description: "Access VC deal flow, private rounds, and whitelist opportunities before public announcement.",
    },
    Feature {
        icon: "🎯",
        title: "Early Entry",
        description: "Invest at seed/pre-sale prices with 10-100x potential before exchange listings.",
    },
    Feature {
        icon: "📈",
        title: "Insider Analysis",
        description: "Get deep-dive research and insider insights from our network of VC partners.",
    },
];

const TRUST_LOGOS: [&str; 6] = ["Solana", "Polygon", "Avalanche", "Chainlink", "Uniswap", "Aave"];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    gains: &'static str,
    avatar: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Early Investor",
        content: "Got into 3 projects at seed stage through CapitalNodes. Already seeing 40x returns on one of them before it even hit exchanges.",
        gains: "40x gains",
        avatar: "SC",
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "VC Fund Manager",
        content: "The deal flow here is incredible. CapitalNodes gives retail investors access to the same opportunities I see in institutional rounds.",
        gains: "Institutional access",
        avatar: "MR",
    },
    Testimonial {
        name: "Alex Thompson",
        role: "Crypto Investor",
        content: "Made more in 6 months with early access than I did in 3 years trading on exchanges. This platform is a game changer.",
        gains: "6-month ROI",
        avatar: "AT",
    },
];

const FAQS: [(&str, &str); 4] = [
    (
        "How early do I get access to these deals?",
        "Our members typically get access 6-18 months before public listings, during seed rounds, pre-sales, and private investment rounds.",
    ),
    (
        "What kind of returns can I expect?",
        "While past performance doesn't guarantee future results, our tracked early-stage investments have seen average returns of 10-100x before public exchange listings.",
    ),
    (
        "Is this only for accredited investors?",
        "No. While some deals require accredited status, we provide access to many opportunities available to retail investors, including whitelists and community rounds.",
    ),
    (
        "How do you source these deals?",
        "Our team has direct relationships with top VCs, founders, and industry insiders who share deal flow and investment opportunities with our platform.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with((), move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        });
    }

    // Parallax on the floating shapes and hero, plus reveal-on-scroll for the
    // sections. One listener covers all of it and is removed on unmount.
    use_effect_with((), |_| {
        let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                let viewport = window_clone
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(800.0);

                if let Some(shapes) = document.query_selector(".floating-shapes").ok().flatten() {
                    let offset = (scroll_y / 10.0).min(100.0);
                    let _ = shapes.set_attribute(
                        "style",
                        &format!("transform: translateY(-{offset}px);"),
                    );
                }
                if let Some(hero) = document.query_selector(".hero-section").ok().flatten() {
                    let offset = (scroll_y / 10.0).min(50.0);
                    let _ = hero.set_attribute(
                        "style",
                        &format!("transform: translateY(-{offset}px);"),
                    );
                }

                // Reveal sections once they enter the lower 90% of the viewport
                if let Ok(nodes) = document.query_selector_all(".reveal") {
                    for i in 0..nodes.length() {
                        let Some(node) = nodes.item(i) else { continue };
                        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
                            continue;
                        };
                        let top = element.get_bounding_client_rect().top();
                        if top < viewport * 0.9 && !element.class_name().contains("visible") {
                            element.set_class_name(&format!("{} visible", element.class_name()));
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Initial check so above-the-fold sections reveal without scrolling
            scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&wasm_bindgen::JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
    });

    html! {
        <div class="landing-page">
            <div class="floating-shapes">
                <div class="shape shape-1"></div>
                <div class="shape shape-2"></div>
                <div class="shape shape-3"></div>
                <div class="shape shape-4"></div>
            </div>

            <section class="hero-section">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <span class="hero-badge">{"⚠️ Exclusive Access Only"}</span>
                        <h1>
                            {"If you see a coin on "}
                            <span class="accent-text">{"Binance, Kraken, or Uniswap"}</span>
                            {", you're already too late."}
                        </h1>
                        <p class="hero-subtitle">
                            {"The real gains are made "}<strong>{"before"}</strong>
                            {" a project ever gets listed on major exchanges. Join the platform that gives you exclusive access to VC deals, whitelists, and insider analysis – before the masses even hear about them."}
                        </p>
                        <ul class="usp-list">
                            {
                                USPS.iter().map(|usp| html! {
                                    <li><span class="usp-check">{"✓"}</span>{*usp}</li>
                                }).collect::<Html>()
                            }
                        </ul>
                        <div class="hero-cta-group">
                            <NavButton special={true}>{"⚡ Get Early Access Now"}</NavButton>
                            <NavButton onclick={scroll_to("how-it-works")}>
                                {"See How It Works"}
                            </NavButton>
                        </div>
                    </div>
                    <div class="hero-chart">
                        <div class="section-card">
                            <h3>{"Investment Timeline"}</h3>
                            <p class="card-subtitle">{"When different investors enter the market"}</p>
                            <InvestmentTimeline />
                        </div>
                    </div>
                </div>
            </section>

            <section class="stats-section reveal">
                <div class="stats-grid">
                    <div class="stat">
                        <div class="stat-number indigo">
                            <AnimatedCounter target={47} suffix="x" />
                        </div>
                        <div class="stat-label">{"Average Early Gains"}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-number purple">
                            <AnimatedCounter target={2847} />{"+"}
                        </div>
                        <div class="stat-label">{"Members"}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-number emerald">
                            <AnimatedCounter target={127} />{"+"}
                        </div>
                        <div class="stat-label">{"VC Deals Tracked"}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-number orange">
                            {"$"}<AnimatedCounter target={340} />{"M+"}
                        </div>
                        <div class="stat-label">{"VC Funding Tracked"}</div>
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="how-section reveal">
                <div class="section-header">
                    <h2>{"How CapitalNodes Works"}</h2>
                    <p>{"Get insider access to the most profitable crypto investments before they go public"}</p>
                </div>
                <div class="feature-grid">
                    {
                        FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="trust-section reveal">
                <p class="trust-intro">{"Trusted by investors who got early access to"}</p>
                <div class="trust-logos">
                    {
                        TRUST_LOGOS.iter().map(|name| html! {
                            <span class="trust-logo">{*name}</span>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="testimonials" class="testimonials-section reveal">
                <h2>{"Success Stories"}</h2>
                <div class="testimonial-grid">
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial-card">
                                <div class="testimonial-header">
                                    <div class="avatar">{t.avatar}</div>
                                    <div class="testimonial-meta">
                                        <div class="testimonial-name">{t.name}</div>
                                        <div class="testimonial-role">{t.role}</div>
                                    </div>
                                    <span class="gains-badge">{t.gains}</span>
                                </div>
                                <p class="testimonial-content">{format!("\"{}\"", t.content)}</p>
                                <div class="stars">{"★★★★★"}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="faq" class="faq-section reveal">
                <h2>{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    {
                        FAQS.iter().map(|(q, a)| html! {
                            <FaqItem question={q.to_string()} answer={a.to_string()} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="final-cta reveal">
                <h2>{"Don't Wait for the Next Bull Run"}</h2>
                <p>
                    {"Position yourself before the masses. Get exclusive access to the next generation of crypto projects while they're still in stealth mode."}
                </p>
                <NavButton special={true}>{"⚡ Get Early Access Now →"}</NavButton>
                <p class="cta-note">{"Limited spots available • No credit card required"}</p>
            </section>

            <footer class="site-footer">
                <div class="footer-brand">
                    <span class="logo-mark"></span>
                    <span class="footer-wordmark">{"CapitalNodes"}</span>
                </div>
                <p class="footer-tagline">{"Exclusive access to early-stage crypto investments"}</p>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    <a href="mailto:team@capitalnodes.example">{"Contact"}</a>
                </div>
                <div class="footer-copyright">
                    <p>{"© 2025 CapitalNodes. All rights reserved."}</p>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    background: linear-gradient(135deg, #eef2ff 0%, #faf5ff 50%, #fdf2f8 100%);
                    color: #111827;
                    overflow-x: hidden;
                }

                .floating-shapes {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    z-index: 0;
                }

                .shape {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(24px);
                    animation: float 8s ease-in-out infinite;
                }

                .shape-1 {
                    top: 5rem; left: 2.5rem;
                    width: 8rem; height: 8rem;
                    background: linear-gradient(to right, rgba(129, 140, 248, 0.15), rgba(192, 132, 252, 0.15));
                }

                .shape-2 {
                    top: 10rem; right: 5rem;
                    width: 6rem; height: 6rem;
                    background: linear-gradient(to right, rgba(192, 132, 252, 0.15), rgba(244, 114, 182, 0.15));
                    animation-direction: reverse;
                }

                .shape-3 {
                    bottom: 10rem; left: 25%;
                    width: 10rem; height: 10rem;
                    background: linear-gradient(to right, rgba(96, 165, 250, 0.15), rgba(129, 140, 248, 0.15));
                }

                .shape-4 {
                    top: 33%; right: 25%;
                    width: 5rem; height: 5rem;
                    background: linear-gradient(to right, rgba(244, 114, 182, 0.15), rgba(192, 132, 252, 0.15));
                    animation-direction: reverse;
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                section {
                    position: relative;
                    z-index: 1;
                    padding: 5rem 1.5rem;
                }

                .hero-section {
                    padding-top: 10rem;
                }

                .hero-grid {
                    max-width: 1152px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                }

                .hero-badge {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                    padding: 0.5rem 1rem;
                    background: linear-gradient(to right, #fee2e2, #ffedd5);
                    color: #b91c1c;
                    border: 1px solid #fecaca;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                .hero-copy h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .accent-text {
                    background: linear-gradient(to right, #dc2626, #ea580c);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .usp-list {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }

                .usp-list li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #374151;
                    font-weight: 500;
                    padding: 0.5rem 0;
                }

                .usp-check {
                    color: #10b981;
                    font-weight: 700;
                    flex-shrink: 0;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .section-card {
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 24px;
                    padding: 2rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    text-align: center;
                }

                .section-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }

                .card-subtitle {
                    color: #6b7280;
                    margin-bottom: 1.5rem;
                }

                .timeline-badges {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 1.5rem;
                }

                .timeline-badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.8rem;
                    font-weight: 600;
                }

                .timeline-badge.members {
                    background: #d1fae5;
                    color: #047857;
                    border: 1px solid #a7f3d0;
                }

                .timeline-badge.regular {
                    background: #fee2e2;
                    color: #b91c1c;
                    border: 1px solid #fecaca;
                }

                .timeline-badge-note {
                    font-size: 0.85rem;
                    color: #6b7280;
                    margin-top: 0.5rem;
                }

                .timeline-phases {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1rem;
                    gap: 0.5rem;
                }

                .timeline-phase {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .timeline.visible .timeline-phase {
                    opacity: 1;
                    transform: translateY(0);
                }

                .phase-name {
                    font-size: 0.75rem;
                    font-weight: 600;
                }

                .phase-gains {
                    font-size: 0.75rem;
                    color: #4f46e5;
                    font-weight: 600;
                }

                .phase-timing {
                    font-size: 0.7rem;
                    color: #6b7280;
                }

                .timeline-caption {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .stats-section {
                    background: linear-gradient(to right, rgba(238, 242, 255, 0.5), rgba(250, 245, 255, 0.5));
                }

                .stats-grid {
                    max-width: 1152px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }

                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                .stat-number {
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .stat-number.indigo { color: #4f46e5; }
                .stat-number.purple { color: #9333ea; }
                .stat-number.emerald { color: #059669; }
                .stat-number.orange { color: #ea580c; }

                .stat-label {
                    color: #4b5563;
                    font-weight: 500;
                }

                .section-header {
                    text-align: center;
                    max-width: 768px;
                    margin: 0 auto 4rem;
                }

                .section-header h2,
                .testimonials-section h2,
                .faq-section h2 {
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1rem;
                    text-align: center;
                }

                .section-header p {
                    font-size: 1.25rem;
                    color: #4b5563;
                }

                .feature-grid {
                    max-width: 1152px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                @media (max-width: 768px) {
                    .feature-grid,
                    .testimonial-grid {
                        grid-template-columns: 1fr !important;
                    }
                }

                .feature-card {
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 24px;
                    padding: 2rem;
                    text-align: center;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .feature-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    background: linear-gradient(to right, #6366f1, #9333ea);
                    border-radius: 16px;
                }

                .feature-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }

                .feature-card p {
                    color: #4b5563;
                    line-height: 1.7;
                }

                .trust-section {
                    background: rgba(249, 250, 251, 0.5);
                    text-align: center;
                }

                .trust-intro {
                    color: #4b5563;
                    margin-bottom: 2rem;
                }

                .trust-logos {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem;
                    opacity: 0.6;
                }

                .trust-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #9ca3af;
                }

                .testimonial-grid {
                    max-width: 1152px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .testimonial-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.3s ease;
                }

                .testimonial-card:hover {
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .testimonial-header {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: linear-gradient(to right, #6366f1, #9333ea);
                    color: #fff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-right: 1rem;
                    flex-shrink: 0;
                }

                .testimonial-name {
                    font-weight: 600;
                }

                .testimonial-role {
                    color: #4b5563;
                    font-size: 0.875rem;
                }

                .gains-badge {
                    margin-left: auto;
                    padding: 0.25rem 0.5rem;
                    background: #d1fae5;
                    color: #047857;
                    border: 1px solid #a7f3d0;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    white-space: nowrap;
                }

                .testimonial-content {
                    color: #374151;
                    font-style: italic;
                    line-height: 1.6;
                }

                .stars {
                    color: #facc15;
                    margin-top: 0.75rem;
                    letter-spacing: 0.1em;
                }

                .faq-section {
                    background: rgba(249, 250, 251, 0.5);
                }

                .faq-list {
                    max-width: 896px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: #fff;
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease;
                }

                .faq-item:hover {
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #111827;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #4f46e5;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #4b5563;
                    line-height: 1.6;
                    margin: 0;
                }

                .final-cta {
                    background: linear-gradient(to right, #4f46e5, #9333ea);
                    color: #fff;
                    text-align: center;
                }

                .final-cta h2 {
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .final-cta p {
                    font-size: 1.25rem;
                    opacity: 0.9;
                    max-width: 672px;
                    margin: 0 auto 2rem;
                }

                .final-cta .nav-button-special {
                    background: #fff;
                    color: #4f46e5;
                    font-size: 1.25rem;
                    padding: 1rem 2.5rem;
                }

                .cta-note {
                    font-size: 0.875rem !important;
                    opacity: 0.75 !important;
                    margin-top: 1rem !important;
                }

                .site-footer {
                    position: relative;
                    z-index: 1;
                    padding: 3rem 1.5rem;
                    background: #fff;
                    border-top: 1px solid rgba(229, 231, 235, 0.5);
                    text-align: center;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .logo-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 8px;
                    background: linear-gradient(to right, #6366f1, #9333ea);
                    position: relative;
                }

                .logo-mark::after {
                    content: '';
                    position: absolute;
                    inset: 0.5rem;
                    background: #fff;
                    border-radius: 2px;
                    transform: rotate(45deg);
                }

                .footer-wordmark {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .footer-tagline {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }

                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }

                .footer-links a {
                    color: #6b7280;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-links a:hover {
                    color: #4f46e5;
                }

                .footer-copyright {
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(229, 231, 235, 0.5);
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </div>
    }
}

/// Smooth-scrolls to a section id on the page.
pub fn scroll_to(id: &'static str) -> Callback<()> {
    Callback::from(move |_| {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let mut options = web_sys::ScrollIntoViewOptions::new();
            options.behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
}
