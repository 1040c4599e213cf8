//! Leptos components for the catalog, basket and review views.
//!
//! Each component owns its flow state in an `Rc<RefCell<_>>` and publishes a
//! projection through a signal after every transition. Network continuations
//! run as later tasks on the same event loop via `spawn_local`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use storefront_basket::{Basket, BasketService, BasketView, QuantityDecision};
use storefront_catalog::{
    CardFormat, CatalogCommand, CatalogView, ProductCard, RenderedPage, SortMode,
};
use storefront_core::{Notice, NoticeKind, ProductId};
use storefront_reviews::{Rating, ReviewBoard, ReviewEntry, ReviewService};

use crate::client::StorefrontClient;

fn notice_class(notice: &Notice) -> &'static str {
    match notice.kind {
        NoticeKind::Validation => "notice notice-validation",
        NoticeKind::Error => "notice notice-error",
    }
}

#[component]
pub fn CatalogPage(view: CatalogView, initial: RenderedPage, format: CardFormat) -> impl IntoView {
    let page_size = view.state().page_size();
    let page_size_choices = view.state().page_size_choices();
    let controller = Rc::new(RefCell::new(view));
    let (page, set_page) = create_signal(initial);
    let (error, set_error) = create_signal(None::<String>);

    let dispatch = move |command: CatalogCommand| {
        let result = controller.borrow_mut().dispatch(command);
        match result {
            Ok(Some(next)) => {
                set_error.set(None);
                set_page.set(next);
            }
            Ok(None) => {}
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let on_page_size = {
        let dispatch = dispatch.clone();
        move |ev: ev::Event| match event_target_value(&ev).parse::<usize>() {
            Ok(size) => dispatch(CatalogCommand::PageSizeChanged(size)),
            Err(_) => set_error.set(Some("Choose how many products to show per page.".to_string())),
        }
    };
    let on_sort = {
        let dispatch = dispatch.clone();
        move |ev: ev::Event| match event_target_value(&ev).parse::<SortMode>() {
            Ok(mode) => dispatch(CatalogCommand::SortChanged(mode)),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };
    let on_prev = {
        let dispatch = dispatch.clone();
        move |_: ev::MouseEvent| dispatch(CatalogCommand::PrevPage)
    };
    let on_next = {
        let dispatch = dispatch.clone();
        move |_: ev::MouseEvent| dispatch(CatalogCommand::NextPage)
    };

    view! {
        <div class="catalog">
            <div class="catalog-controls">
                <label for="products-per-page">"Products per page"</label>
                <select id="products-per-page" on:change=on_page_size>
                    {page_size_choices
                        .into_iter()
                        .map(|n| {
                            view! {
                                <option value={n.to_string()} selected={n == page_size}>
                                    {n.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <label for="sort-by">"Sort by"</label>
                <select id="sort-by" on:change=on_sort>
                    {SortMode::ALL
                        .iter()
                        .map(|mode| view! { <option value={mode.as_str()}>{mode.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            {move || error.get().map(|msg| view! { <p class="notice notice-validation">{msg}</p> })}

            <div id="product-container">
                {move || {
                    page.with(|p| p.cards(&format))
                        .into_iter()
                        .map(|card| view! { <ProductCardView card=card/> })
                        .collect_view()
                }}
            </div>

            <div class="pagination">
                <button
                    id="prev-page"
                    disabled=move || page.with(|p| !p.prev_enabled)
                    on:click=on_prev
                >
                    "Previous"
                </button>
                <span id="page-info">{move || page.with(|p| p.page_label.clone())}</span>
                <button
                    id="next-page"
                    disabled=move || page.with(|p| !p.next_enabled)
                    on:click=on_next
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProductCardView(card: ProductCard) -> impl IntoView {
    let ProductCard {
        name,
        href,
        image_src,
        image_alt,
        description,
        price_label,
        stock_label,
        in_stock,
        ..
    } = card;

    view! {
        <div class="product-card">
            <a href=href class="product-link">
                <h3>{name}</h3>
                <img src=image_src class="card-img-top" alt=image_alt/>
                <p>{description}</p>
                <p>{price_label}</p>
                <p class={if in_stock { "stock" } else { "stock out-of-stock" }}>{stock_label}</p>
            </a>
        </div>
    }
}

#[component]
pub fn BasketPage(
    basket: Basket,
    client: StorefrontClient,
    currency_symbol: String,
) -> impl IntoView {
    let state = Rc::new(RefCell::new(basket));
    let symbol = Rc::new(currency_symbol);
    let (snapshot, set_snapshot) = create_signal(BasketView::project(&state.borrow(), &symbol));

    let refresh = {
        let state = Rc::clone(&state);
        move || set_snapshot.set(BasketView::project(&state.borrow(), &symbol))
    };

    let on_quantity = {
        let state = Rc::clone(&state);
        let client = client.clone();
        let refresh = refresh.clone();
        move |product_id: ProductId, raw: String| {
            let Ok(requested) = raw.trim().parse::<i64>() else {
                // Unparseable input: snap the control back to the confirmed value.
                refresh();
                return;
            };
            let decision = state.borrow_mut().begin_quantity_change(product_id, requested);
            refresh();

            match decision {
                Ok(QuantityDecision::Dispatch(pending)) => {
                    let state = Rc::clone(&state);
                    let client = client.clone();
                    let refresh = refresh.clone();
                    spawn_local(async move {
                        let response =
                            client.update_quantity(pending.product_id, pending.quantity).await;
                        let completed =
                            state.borrow_mut().complete_quantity_change(pending, response);
                        if let Err(err) = completed {
                            logging::warn!("basket update failed: {err}");
                        }
                        refresh();
                    });
                }
                Ok(QuantityDecision::Clamped { .. }) => {}
                Err(err) => logging::warn!("basket update not sent: {err}"),
            }
        }
    };

    let on_remove = {
        let state = Rc::clone(&state);
        let refresh = refresh.clone();
        move |product_id: ProductId| {
            let pending = state.borrow_mut().begin_removal(product_id);
            refresh();

            match pending {
                Ok(pending) => {
                    let state = Rc::clone(&state);
                    let client = client.clone();
                    let refresh = refresh.clone();
                    spawn_local(async move {
                        let response = client.remove_line(pending.product_id).await;
                        if let Err(err) = state.borrow_mut().complete_removal(pending, response) {
                            logging::warn!("basket removal failed: {err}");
                        }
                        refresh();
                    });
                }
                Err(err) => logging::warn!("basket removal not sent: {err}"),
            }
        }
    };

    view! {
        <div class="basket">
            {move || {
                snapshot
                    .with(|s| s.notice.clone())
                    .map(|n| view! { <p class={notice_class(&n)}>{n.message}</p> })
            }}

            {move || {
                let basket = snapshot.get();
                if basket.is_empty() {
                    return view! { <p class="empty-basket-message">"Your basket is empty."</p> }
                        .into_view();
                }

                let rows = basket
                    .rows
                    .into_iter()
                    .map(|row| {
                        let product_id = row.product_id;
                        let on_quantity = on_quantity.clone();
                        let on_remove = on_remove.clone();
                        view! {
                            <tr data-product-id={product_id.to_string()}>
                                <td>{row.name}</td>
                                <td class="price">{row.price_label}</td>
                                <td>
                                    <input
                                        type="number"
                                        class="quantity-input"
                                        min={row.min_quantity.to_string()}
                                        max={row.max_quantity.to_string()}
                                        prop:value={row.input_quantity.to_string()}
                                        disabled=row.busy
                                        on:change=move |ev| {
                                            on_quantity(product_id, event_target_value(&ev))
                                        }
                                    />
                                </td>
                                <td class="total">{row.line_total_label}</td>
                                <td>
                                    <button
                                        class="delete-btn"
                                        disabled=row.busy
                                        on:click=move |_| on_remove(product_id)
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view();

                view! {
                    <table class="basket-table">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th>"Price"</th>
                                <th>"Quantity"</th>
                                <th>"Total"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                    <p class="basket-total">{basket.total_label}</p>
                    <div class="basket-actions">
                        <a href="/checkout" class="btn">"Checkout"</a>
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReviewsSnapshot {
    entries: Vec<ReviewEntry>,
    rating: Rating,
    comment: String,
    submitting: bool,
    notice: Option<Notice>,
}

impl ReviewsSnapshot {
    fn of(board: &ReviewBoard) -> Self {
        Self {
            entries: board.entries().to_vec(),
            rating: board.form().rating,
            comment: board.form().comment.clone(),
            submitting: board.is_submitting(),
            notice: board.notice().cloned(),
        }
    }
}

#[component]
pub fn ReviewsPanel(board: ReviewBoard, client: StorefrontClient) -> impl IntoView {
    let state = Rc::new(RefCell::new(board));
    let (snapshot, set_snapshot) = create_signal(ReviewsSnapshot::of(&state.borrow()));

    let refresh = {
        let state = Rc::clone(&state);
        move || set_snapshot.set(ReviewsSnapshot::of(&state.borrow()))
    };

    let on_rating = {
        let state = Rc::clone(&state);
        let refresh = refresh.clone();
        move |ev: ev::Event| {
            if let Ok(rating) = event_target_value(&ev).parse::<Rating>() {
                state.borrow_mut().set_rating(rating);
            }
            refresh();
        }
    };

    let on_comment = {
        let state = Rc::clone(&state);
        move |ev: ev::Event| state.borrow_mut().set_comment(event_target_value(&ev))
    };

    let on_submit = {
        let state = Rc::clone(&state);
        let refresh = refresh.clone();
        move |ev: ev::MouseEvent| {
            ev.prevent_default();
            let pending = state.borrow_mut().begin_submit();
            refresh();

            match pending {
                Ok(pending) => {
                    let state = Rc::clone(&state);
                    let client = client.clone();
                    let refresh = refresh.clone();
                    spawn_local(async move {
                        let response = client.create_review(&pending.request).await;
                        if let Err(err) = state.borrow_mut().complete_submit(&pending, response) {
                            logging::warn!("review submission failed: {err}");
                        }
                        refresh();
                    });
                }
                Err(err) => logging::warn!("review not sent: {err}"),
            }
        }
    };

    view! {
        <div class="reviews">
            <form class="review-form">
                <label for="rating">"Rating"</label>
                <select
                    id="rating"
                    prop:value=move || snapshot.with(|s| s.rating.get().to_string())
                    on:change=on_rating
                >
                    {(Rating::MIN.get()..=Rating::MAX.get())
                        .map(|n| view! { <option value={n.to_string()}>{n.to_string()}</option> })
                        .collect_view()}
                </select>

                <label for="comment">"Comment"</label>
                <textarea
                    id="comment"
                    prop:value=move || snapshot.with(|s| s.comment.clone())
                    on:input=on_comment
                ></textarea>

                <button
                    id="submit-review"
                    type="submit"
                    disabled=move || snapshot.with(|s| s.submitting)
                    on:click=on_submit
                >
                    {move || {
                        if snapshot.with(|s| s.submitting) {
                            "Submitting..."
                        } else {
                            "Submit Review"
                        }
                    }}
                </button>
            </form>

            {move || {
                snapshot
                    .with(|s| s.notice.clone())
                    .map(|n| view! { <p class={notice_class(&n)}>{n.message}</p> })
            }}

            <ul id="reviews-list">
                {move || {
                    snapshot.with(|s| {
                        s.entries
                            .iter()
                            .map(|entry| {
                                view! {
                                    <li>
                                        <strong>{entry.author()}</strong>
                                        " rated "
                                        <strong>{entry.rating.to_string()}</strong>
                                        <p>{entry.comment.clone()}</p>
                                        <small>{entry.created_at_label()}</small>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ul>
        </div>
    }
}
