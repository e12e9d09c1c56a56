//! Static article pages linked from the landing page. Pure presentation,
//! one component per article, sharing a common layout.

use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
struct ArticleLayoutProps {
    title: AttrValue,
    lead: AttrValue,
    children: Children,
}

#[function_component(ArticleLayout)]
fn article_layout(props: &ArticleLayoutProps) -> Html {
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
        <div class="article-page">
            <style>{ARTICLE_STYLES}</style>
            <article class="article-body">
                <Link<Route> to={Route::Home} classes="article-back">{"← Volver a Conecta IT"}</Link<Route>>
                <h1>{ props.title.clone() }</h1>
                <p class="article-lead">{ props.lead.clone() }</p>
                { for props.children.iter() }
                <div class="article-cta">
                    <p>{"¿Te identificas con alguno de estos puntos? Conversemos."}</p>
                    <Link<Route> to={Route::Home} classes="article-cta-link">{"Contáctanos"}</Link<Route>>
                </div>
            </article>
        </div>
    }
}

#[function_component(SlowItSupport)]
pub fn slow_it_support() -> Html {
    html! {
        <ArticleLayout
            title="5 Señales de que tu Soporte IT actual está Frenando a tu Pyme"
            lead="Un proveedor lento o reactivo no solo molesta: cuesta horas de trabajo y oportunidades de negocio. Estas son las señales más comunes."
        >
            <h2>{"1. Los tickets tardan días en responderse"}</h2>
            <p>{"Si una impresora caída o un correo bloqueado espera 48 horas por una primera respuesta, tu operación está pagando ese tiempo. Un soporte adecuado para Pymes responde en minutos u horas, no en días."}</p>

            <h2>{"2. Siempre eres tú quien hace seguimiento"}</h2>
            <p>{"Cuando tienes que insistir para saber el estado de un problema, el proveedor no tiene un proceso: tiene una bandeja de entrada. El seguimiento proactivo es lo mínimo que deberías exigir."}</p>

            <h2>{"3. Solo aparecen cuando algo se rompe"}</h2>
            <p>{"El soporte reactivo apaga incendios; el soporte estratégico los previene. Si nunca recibes recomendaciones de mejora, mantenciones programadas o alertas tempranas, estás pagando por menos de lo que necesitas."}</p>

            <h2>{"4. Los mismos problemas vuelven cada mes"}</h2>
            <p>{"Reiniciar el equipo no es una solución, es un parche. Los problemas recurrentes indican que nadie está buscando la causa raíz."}</p>

            <h2>{"5. No entienden tu negocio"}</h2>
            <p>{"Un buen partner tecnológico sabe qué sistemas son críticos para ti y prioriza en consecuencia. Si cada ticket parte de cero explicando quién eres, no hay partnership: hay transacciones."}</p>
        </ArticleLayout>
    }
}

#[function_component(UnresponsiveSupport)]
pub fn unresponsive_support() -> Html {
    html! {
        <ArticleLayout
            title="¿Tu Soporte TI no Responde? Cuándo y Cómo Cambiar de Proveedor"
            lead="Cambiar de proveedor tecnológico parece complicado, pero quedarse con uno que no responde sale más caro. Aquí las señales de alerta y los pasos para una transición ordenada."
        >
            <h2>{"Cuándo cambiar"}</h2>
            <p>{"Hay tres señales que justifican el cambio de inmediato: tiempos de respuesta que afectan tu operación, falta de transparencia sobre lo que hacen con tu infraestructura, y cobros que crecen sin mejoras visibles."}</p>

            <h2>{"Antes de cambiar: recupera tu información"}</h2>
            <p>{"Asegúrate de tener en tu poder las credenciales de administrador de tus sistemas, el inventario de equipos y licencias, y los respaldos. Son tuyos, no del proveedor. Un proveedor serio los entrega sin fricción."}</p>

            <h2>{"Cómo evaluar al nuevo partner"}</h2>
            <p>{"Pide tiempos de respuesta comprometidos por escrito, referencias de otras Pymes de tu tamaño y un plan de transición concreto. Desconfía de quien promete todo sin conocer tu operación."}</p>

            <h2>{"La transición no debería detenerte"}</h2>
            <p>{"Un cambio bien hecho ocurre en paralelo: el nuevo proveedor levanta la información mientras el anterior sigue operando. Tu equipo no debería notar el cambio más que en la velocidad de las respuestas."}</p>
        </ArticleLayout>
    }
}

#[function_component(CybersecurityGuide)]
pub fn cybersecurity_guide() -> Html {
    html! {
        <ArticleLayout
            title="Guía de Ciberseguridad para Pymes en Chile: 3 Pasos que Puedes Tomar Hoy"
            lead="No necesitas un presupuesto corporativo para reducir drásticamente tu riesgo. Estos tres pasos cubren la mayoría de los ataques que afectan a Pymes."
        >
            <h2>{"Paso 1: Activa la verificación en dos pasos"}</h2>
            <p>{"La mayoría de los accesos no autorizados parten de una contraseña robada. La verificación en dos pasos en el correo y los sistemas críticos bloquea ese camino, y activarla toma minutos por cuenta."}</p>

            <h2>{"Paso 2: Respalda lo que no puedes perder"}</h2>
            <p>{"Define qué información detendría tu negocio si desapareciera mañana y respáldala de forma automática, con al menos una copia fuera de la oficina. Un respaldo que depende de que alguien se acuerde no es un respaldo."}</p>

            <h2>{"Paso 3: Mantén los equipos actualizados"}</h2>
            <p>{"Las actualizaciones de sistema y antivirus corrigen las vulnerabilidades que los atacantes explotan de forma masiva. Configúralas como automáticas y revisa una vez al mes que estén aplicándose."}</p>

            <h2>{"¿Y después?"}</h2>
            <p>{"Con estos tres pasos cubres lo urgente. El siguiente nivel es capacitar a tu equipo para reconocer correos fraudulentos y definir quién tiene acceso a qué. Ahí es donde un partner tecnológico marca la diferencia."}</p>
        </ArticleLayout>
    }
}

#[function_component(PcOptimization)]
pub fn pc_optimization() -> Html {
    html! {
        <ArticleLayout
            title="Optimización de PC en la Oficina: Cómo Acelerar el Rendimiento sin Gastar de Más"
            lead="Antes de renovar equipos, vale la pena saber qué los está frenando. Estos ajustes recuperan rendimiento sin tocar el presupuesto."
        >
            <h2>{"Limpia el inicio de Windows"}</h2>
            <p>{"Cada programa que se abre solo al encender el equipo roba memoria todo el día. Revisar la lista de inicio y dejar solo lo necesario es el ajuste con mejor retorno por minuto invertido."}</p>

            <h2>{"El disco importa más que el procesador"}</h2>
            <p>{"En equipos de oficina, cambiar un disco mecánico por uno SSD transforma un computador lento en uno nuevo por una fracción del costo de renovarlo. Es la única mejora de hardware que casi siempre se justifica."}</p>

            <h2>{"Memoria: suficiente, no infinita"}</h2>
            <p>{"Si el equipo se arrastra con varias pestañas del navegador abiertas, probablemente le falta RAM. Pasar de 4 a 8 GB suele bastar para trabajo de oficina; más allá, el beneficio se diluye."}</p>

            <h2>{"Cuándo sí conviene renovar"}</h2>
            <p>{"Un equipo con más de 6 u 7 años consume más en mantención y tiempo perdido de lo que cuesta reemplazarlo. La clave es decidirlo con datos de uso reales y no por percepción."}</p>
        </ArticleLayout>
    }
}

const ARTICLE_STYLES: &str = r#"
.article-page {
    font-family: 'Segoe UI', sans-serif;
    background: linear-gradient(135deg, #f9fafb, #eff6ff);
    color: #1e293b;
    min-height: 100vh;
    padding: 3rem 1.5rem;
}
.article-body {
    max-width: 46rem;
    margin: 0 auto;
    background: #fff;
    border-radius: 0.75rem;
    border: 1px solid rgba(229, 231, 235, 0.8);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.08);
    padding: 3rem 2.5rem;
}
.article-back {
    display: inline-block;
    margin-bottom: 2rem;
    color: #0078d4;
    font-weight: 600;
    text-decoration: none;
}
.article-back:hover { text-decoration: underline; }
.article-body h1 { font-size: 2rem; line-height: 1.25; margin-bottom: 1rem; }
.article-lead { font-size: 1.125rem; color: #475569; margin-bottom: 2rem; line-height: 1.7; }
.article-body h2 { font-size: 1.375rem; margin: 2rem 0 0.75rem; }
.article-body p { color: #334155; line-height: 1.8; }
.article-cta {
    margin-top: 3rem;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: linear-gradient(to bottom right, #dbeafe, #eff6ff);
    text-align: center;
}
.article-cta p { margin-bottom: 1rem; font-weight: 600; }
.article-cta-link {
    display: inline-block;
    padding: 0.6rem 2rem;
    border-radius: 0.5rem;
    background: linear-gradient(to right, #2563eb, #1e40af);
    color: #fff;
    font-weight: 600;
    text-decoration: none;
}
@media (max-width: 640px) {
    .article-body { padding: 2rem 1.25rem; }
}
"#;
