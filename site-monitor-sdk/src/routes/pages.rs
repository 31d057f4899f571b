use super::{Meta, Route};

const LAYOUT: &'static str = "layout/index";

/// H5 pages are full-screen and never listed in the navigation menu.
const fn h5(
    path: &'static str,
    name: &'static str,
    component: &'static str,
    title: &'static str,
) -> Route {
    Route {
        path,
        name: Some(name),
        component,
        meta: Meta {
            title: Some(title),
            show_link: false,
            rank: None,
        },
        children: &[],
    }
}

pub(super) static ROUTES: [Route; 9] = [
    Route {
        path: "/login",
        name: Some("Login"),
        component: "views/login/index",
        meta: Meta {
            title: Some("登录"),
            show_link: false,
            rank: Some(101),
        },
        children: &[],
    },
    h5("/h5/home", "H5Home", "views/h5/home/index", "ARWeb遮罩H5"),
    h5("/h5/clock", "H5Clock", "views/h5/clock/index", "人员打卡"),
    h5("/h5/health", "H5Health", "views/h5/health/index", "人员健康监测"),
    h5("/h5/box", "H5Box", "views/h5/box/index", "一号配电箱"),
    h5("/h5/crane", "H5Crane", "views/h5/crane/index", "一号塔吊"),
    h5("/h5/page1", "H5Page1", "views/h5/page1/index", "塔吊数据面板"),
    h5("/h5/page2", "H5Page2", "views/h5/page2/index", "环境监测面板"),
    Route {
        path: "/redirect",
        name: None,
        component: LAYOUT,
        meta: Meta {
            title: Some("加载中..."),
            show_link: false,
            rank: Some(102),
        },
        children: &[Route {
            path: "/redirect/:path(.*)",
            name: Some("Redirect"),
            component: "layout/redirect",
            meta: Meta {
                title: None,
                show_link: false,
                rank: None,
            },
            children: &[],
        }],
    },
];
