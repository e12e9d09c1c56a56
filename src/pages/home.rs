use yew::prelude::*;
use yew_router::components::Link;

use crate::components::contact_form::ContactForm;
use crate::components::icons::{ArrowIcon, HeadsetIcon, MailIcon, ShieldIcon, TrendIcon, WhatsAppIcon};
use crate::components::reveal::Reveal;
use crate::Route;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    icon: Html,
    title: AttrValue,
    text: AttrValue,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <div class="service-icon">{ props.icon.clone() }</div>
            <h4>{ props.title.clone() }</h4>
            <p>{ props.text.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ArticleCardProps {
    to: Route,
    title: AttrValue,
    text: AttrValue,
}

#[function_component(ArticleCard)]
fn article_card(props: &ArticleCardProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes="article-card">
            <h4>{ props.title.clone() }</h4>
            <p>{ props.text.clone() }</p>
            <div class="article-arrow"><ArrowIcon /></div>
        </Link<Route>>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Back from an article page the browser keeps the old scroll offset.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{STYLES}</style>

            <div class="page-frame">
                <header class="hero">
                    <div class="hero-inner">
                        <a href="/" class="hero-logo">
                            <img src="https://placehold.co/224x48/FFFFFF/0078D4?text=Conecta+IT&font=segoe-ui" alt="Logo de Conecta IT" />
                        </a>
                        <p class="hero-tagline">{"Tecnología que Impulsa. Soporte que Responde."}</p>
                        <div class="hero-contacts">
                            <a href="mailto:contacto@conectait.cl" class="hero-contact-link">
                                <MailIcon />
                                {"contacto@conectait.cl"}
                            </a>
                            <a href="https://wa.me/56934279755" target="_blank" class="hero-contact-link">
                                <WhatsAppIcon />
                                {"+56 9 3427 9755"}
                            </a>
                        </div>
                    </div>
                </header>

                <Reveal class="section">
                    <div class="pitch-card">
                        <h2>{"Tu Pyme es Ágil. Tu Soporte Tecnológico También Debería Serlo."}</h2>
                        <p>{"Entendemos la frustración de un soporte lento e ineficiente. Por eso, nos dedicamos a ser el partner tecnológico que tu Pyme merece: proactivo, siempre disponible y enfocado en potenciar tu crecimiento."}</p>
                    </div>
                </Reveal>

                <Reveal class="section">
                    <h3 class="section-title">{"Más que un Soporte, un Partner Estratégico"}</h3>
                    <div class="services-grid">
                        <ServiceCard
                            icon={html! { <HeadsetIcon /> }}
                            title="Soporte que Responde"
                            text="Respuestas en minutos, no en días. Solucionamos tus problemas con la urgencia que tu negocio necesita."
                        />
                        <ServiceCard
                            icon={html! { <ShieldIcon /> }}
                            title="Seguridad Proactiva"
                            text="Más que apagar incendios, prevenimos que ocurran. Nos anticipamos a las amenazas para que trabajes con tranquilidad."
                        />
                        <ServiceCard
                            icon={html! { <TrendIcon /> }}
                            title="Consultoría para Crecer"
                            text="Te guiamos para que te dediques a lo que mejor sabes hacer: hacer crecer tu negocio."
                        />
                    </div>
                </Reveal>

                <Reveal class="section">
                    <h3 class="section-title">{"Recursos y Artículos para tu Negocio"}</h3>
                    <div class="articles-grid">
                        <ArticleCard
                            to={Route::SlowItSupport}
                            title="5 Señales de que tu Soporte IT actual está Frenando a tu Pyme"
                            text="Identifica si tu proveedor actual es lento, reactivo o no está a la altura de tus necesidades."
                        />
                        <ArticleCard
                            to={Route::UnresponsiveSupport}
                            title="¿Tu Soporte TI no Responde? Cuándo y Cómo Cambiar de Proveedor"
                            text="Descubre las señales de alerta y los pasos para encontrar un nuevo partner tecnológico que sí responde."
                        />
                        <ArticleCard
                            to={Route::CybersecurityGuide}
                            title="Guía de Ciberseguridad para Pymes en Chile: 3 Pasos que Puedes Tomar Hoy"
                            text="Protege tu negocio de amenazas digitales con 3 pasos esenciales que puedes implementar hoy mismo."
                        />
                        <ArticleCard
                            to={Route::PcOptimization}
                            title="Optimización de PC en la Oficina: Cómo Acelerar el Rendimiento sin Gastar de Más"
                            text="Consejos prácticos para mejorar la velocidad de tus equipos y aumentar la productividad."
                        />
                    </div>
                </Reveal>

                <Reveal class="section contact-panel">
                    <ContactForm />
                </Reveal>

                <footer class="site-footer">
                    <p>{"© 2025 Conecta IT. Todos los derechos reservados."}</p>
                </footer>
            </div>
        </div>
    }
}

const STYLES: &str = r#"
.landing-page {
    font-family: 'Segoe UI', sans-serif;
    background: linear-gradient(135deg, #f9fafb, #eff6ff);
    color: #1e293b;
    -webkit-font-smoothing: antialiased;
    min-height: 100vh;
}
.page-frame {
    max-width: 80rem;
    margin: 0 auto;
    padding: 2rem 1.5rem;
}
.icon-lg { width: 2.5rem; height: 2.5rem; }
.icon-sm { width: 1.25rem; height: 1.25rem; margin-right: 0.5rem; vertical-align: -0.25rem; }

/* Hero */
.hero {
    position: relative;
    text-align: center;
    padding: 5rem 1.5rem;
    margin-bottom: 2.5rem;
    border-radius: 1rem;
    overflow: hidden;
    background: linear-gradient(45deg, #2563eb, #60a5fa);
    color: #fff;
    box-shadow: 0 25px 50px -12px rgba(37, 99, 235, 0.35);
}
.hero-inner { position: relative; z-index: 1; }
.hero-logo { display: inline-block; margin-bottom: 1.5rem; }
.hero-logo img { width: 14rem; }
.hero-tagline {
    font-size: 1.5rem;
    font-weight: 300;
    color: #dbeafe;
    max-width: 48rem;
    margin: 0 auto;
}
.hero-contacts {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem 2rem;
    margin-top: 2rem;
}
.hero-contact-link {
    color: #fff;
    font-weight: 600;
    text-decoration: none;
    display: inline-flex;
    align-items: center;
    transition: color 0.3s;
}
.hero-contact-link:hover { color: #bfdbfe; }
.hero-inner > * { animation: fade-in-up 0.8s cubic-bezier(0.6, 0.05, 0.01, 0.9) both; }
.hero-tagline { animation-delay: 0.15s; }
.hero-contacts { animation-delay: 0.3s; }

/* Scroll reveal */
@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(40px); }
    to { opacity: 1; transform: translateY(0); }
}
.reveal {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.8s cubic-bezier(0.6, 0.05, 0.01, 0.9),
                transform 0.8s cubic-bezier(0.6, 0.05, 0.01, 0.9);
}
.reveal.visible { opacity: 1; transform: translateY(0); }

.section { padding: 3.5rem 0; }
.section-title {
    font-size: 2rem;
    font-weight: 700;
    text-align: center;
    margin-bottom: 3rem;
    color: #1e293b;
}
.section-subtitle {
    text-align: center;
    color: #475569;
    font-size: 1.125rem;
    margin: -2rem 0 2.5rem;
}

/* Pitch */
.pitch-card {
    background: #fff;
    padding: 3rem 2rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(229, 231, 235, 0.8);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.08);
    text-align: center;
}
.pitch-card h2 { font-size: 2.25rem; line-height: 1.2; margin-bottom: 1.25rem; }
.pitch-card p { font-size: 1.25rem; color: #475569; max-width: 56rem; margin: 0 auto; line-height: 1.7; }

/* Services */
.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    gap: 2rem;
}
.service-card {
    background: #fff;
    padding: 2rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(229, 231, 235, 0.5);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    text-align: center;
    transition: transform 0.3s, box-shadow 0.3s;
}
.service-card:hover {
    transform: translateY(-0.5rem);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}
.service-icon {
    display: inline-flex;
    padding: 1.25rem;
    margin-bottom: 1.5rem;
    border-radius: 9999px;
    background: linear-gradient(to bottom right, #dbeafe, #bfdbfe);
    color: #0078d4;
    box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);
}
.service-card h4 { font-size: 1.25rem; margin-bottom: 0.75rem; }
.service-card p { color: #475569; line-height: 1.7; }

/* Articles */
.articles-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
    gap: 2rem;
}
.article-card {
    position: relative;
    display: block;
    background: #fff;
    padding: 1.5rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(229, 231, 235, 0.5);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    text-decoration: none;
    color: inherit;
    overflow: hidden;
    transition: transform 0.3s, box-shadow 0.3s;
}
.article-card:hover { transform: scale(1.03); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.12); }
.article-card h4 { font-size: 1.25rem; line-height: 1.375; margin-bottom: 0.5rem; transition: color 0.3s; }
.article-card:hover h4 { color: #0078d4; }
.article-card p { color: #475569; }
.article-arrow {
    position: absolute;
    bottom: 1rem;
    right: 1rem;
    color: #0078d4;
    opacity: 0;
    transition: opacity 0.3s;
}
.article-card:hover .article-arrow { opacity: 1; }

/* Contact */
.contact-panel {
    background: #fff;
    padding: 2rem;
    border-radius: 0.75rem;
    border: 1px solid rgba(229, 231, 235, 0.8);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.08);
}
.contact-form { max-width: 36rem; margin: 0 auto; }
.form-field { margin-bottom: 1.5rem; }
.form-label {
    display: block;
    font-size: 0.875rem;
    font-weight: 600;
    color: #334155;
    margin-bottom: 0.25rem;
}
.form-input {
    display: block;
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    background: #f3f4f6;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    font: inherit;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.form-input:focus { outline: 2px solid #0078d4; outline-offset: 0; }
.form-actions { text-align: center; padding-top: 1.5rem; }
.submit-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.75rem 2.5rem;
    border: none;
    border-radius: 0.5rem;
    font-size: 1rem;
    font-weight: 600;
    color: #fff;
    cursor: pointer;
    background: linear-gradient(to right, #2563eb, #1e40af);
    box-shadow: 0 10px 15px -3px rgba(37, 99, 235, 0.5);
    transition: transform 0.3s, box-shadow 0.3s, opacity 0.3s;
}
.submit-button:hover:enabled {
    transform: translateY(-2px) scale(1.05);
    box-shadow: 0 20px 25px -5px rgba(37, 99, 235, 0.7);
}
.submit-button:disabled { opacity: 0.5; cursor: default; }
.status-message { text-align: center; margin-top: 1.5rem; font-weight: 500; font-size: 0.875rem; }
.status-success { color: #16a34a; }
.status-error { color: #dc2626; }

/* Footer */
.site-footer {
    text-align: center;
    margin-top: 3rem;
    color: #64748b;
    font-size: 0.875rem;
}

@media (max-width: 768px) {
    .hero { padding: 3.5rem 1rem; }
    .pitch-card h2 { font-size: 1.75rem; }
    .section { padding: 2.5rem 0; }
}
"#;
