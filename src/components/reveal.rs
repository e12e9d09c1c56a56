use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that fades its content in the first time it scrolls into view.
/// An `IntersectionObserver` adds the `visible` class once and then stops
/// watching; the actual animation is CSS on `.reveal`.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});

                if let Some(element) = node.cast::<Element>() {
                    let on_intersect = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    let target = entry.target();
                                    let _ = target.class_list().add_1("visible");
                                    observer.unobserve(&target);
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(0.2));

                    match IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            cleanup = Box::new(move || {
                                observer.disconnect();
                                drop(on_intersect);
                            });
                        }
                        Err(_) => on_intersect.forget(),
                    }
                }

                move || cleanup()
            },
            (),
        );
    }

    html! {
        <section ref={node} class={classes!("reveal", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}
