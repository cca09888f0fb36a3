use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AuthContext;
use crate::components::lightbox::Lightbox;
use crate::components::loading::LoadingContext;
use crate::model::Product;

/// 灯箱的初始占位图（"not found"）
const PLACEHOLDER_PHOTO: &str = "https://images.unsplash.com/photo-1594322436404-5a0526db4d13?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxzZWFyY2h8M3x8bm90JTIwZm91bmR8ZW58MHx8MHx8fDA%3D";

/// 拉取产品列表
///
/// 成功时整体替换本地列表；失败时保留上一次成功的数据，
/// 服务端消息仅记录到控制台。加载计数器包住整个调用。
pub fn load_products(
    ctx: AuthContext,
    loading: LoadingContext,
    set_products: WriteSignal<Vec<Product>>,
) {
    let api = ctx.state.get_untracked().api;

    loading.begin();
    spawn_local(async move {
        match api.get_products().await {
            Ok(list) => {
                set_products.try_set(list);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("取得產品列表失敗: {}", err).into());
            }
        }
        loading.end();
    });
}

/// 产品浏览页：左栏列表，右栏单一产品细节，次图点击打开灯箱
#[component]
pub fn ProductsPage(
    /// 最近一次成功拉取的产品列表
    #[prop(into)]
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    // 细节栏展示的产品：始终是列表中某一行记录的完整拷贝
    let (selected, set_selected) = signal(Option::<Product>::None);

    let (photo_url, set_photo_url) = signal(PLACEHOLDER_PHOTO.to_string());
    let (lightbox_open, set_lightbox_open) = signal(false);

    // 点击次图：更新灯箱 URL，URL 非空才展开
    let open_lightbox = move |url: String| {
        set_photo_url.set(url.clone());
        if !url.is_empty() {
            set_lightbox_open.set(true);
        }
    };

    view! {
        <Lightbox
            open=lightbox_open
            src=photo_url
            on_close=Callback::new(move |_| set_lightbox_open.set(false))
        />
        <div class="container">
            <div class="row mt-5">
                <div class="col-md-6">
                    <h2>"產品列表"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"產品名稱"</th>
                                <th>"原價"</th>
                                <th>"售價"</th>
                                <th>"是否啟用"</th>
                                <th>"查看細節"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || products.with(|p| p.is_empty())>
                                <tr>
                                    <td colspan="5">"尚無產品資料"</td>
                                </tr>
                            </Show>
                            <For
                                each=move || products.get()
                                key=|item| item.id.clone()
                                children=move |item: Product| {
                                    let detail = item.clone();
                                    view! {
                                        <tr>
                                            <td>{item.title}</td>
                                            <td>{item.origin_price}</td>
                                            <td>{item.price}</td>
                                            <td>{if item.is_enabled { "啟用" } else { "未啟用" }}</td>
                                            <td>
                                                <button
                                                    class="btn btn-primary"
                                                    on:click=move |_| set_selected.set(Some(detail.clone()))
                                                >
                                                    "查看細節"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <div class="col-md-6">
                    <h2>"單一產品細節"</h2>
                    {move || match selected.get() {
                        Some(product) => {
                            let images = product.images_url.clone();
                            view! {
                                <div class="card mb-3">
                                    <img
                                        src=product.image_url
                                        class="card-img-top primary-image"
                                        alt="主圖"
                                    />
                                    <div class="card-body">
                                        <h5 class="card-title">
                                            {product.title}
                                            <span class="badge bg-primary ms-2">{product.category}</span>
                                        </h5>
                                        <p class="card-text">"商品描述：" {product.description}</p>
                                        <p class="card-text">"商品內容：" {product.content}</p>
                                        <div class="d-flex">
                                            <p class="card-text text-secondary">
                                                <del>{product.origin_price}</del>
                                            </p>
                                            "元 / " {product.price} " 元"
                                        </div>
                                        <h5 class="mt-3">"更多圖片："</h5>
                                        <div class="d-flex flex-wrap">
                                            <div class="row">
                                                <For
                                                    each=move || images.clone().into_iter().enumerate()
                                                    key=|(index, _)| *index
                                                    children=move |(_, url): (usize, String)| {
                                                        let src = url.clone();
                                                        view! {
                                                            <div class="col-4">
                                                                <img
                                                                    src=src
                                                                    class="images img-cover"
                                                                    width="80%"
                                                                    height="80"
                                                                    alt="副圖"
                                                                    on:click=move |_| open_lightbox(url.clone())
                                                                />
                                                            </div>
                                                        }
                                                    }
                                                />
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! { <p class="text-secondary">"請選擇一個商品查看"</p> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
