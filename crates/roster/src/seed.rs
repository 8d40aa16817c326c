use crate::member::{Member, MemberId};
use crate::permission::Permission;

/// The roster a fresh view starts with.
///
/// The fourth member was historically seeded with a misspelled customer
/// requests label that no checkbox controlled; it is seeded with the catalog
/// [`Permission::CustomerRequests`] instead so the checklist can edit it.
pub fn initial_members() -> Vec<Member> {
	vec![
		Member::new(MemberId::new(1), "Artem Ivanov", "artem@gmail.com")
			.with_permissions([Permission::Blog, Permission::Analytics])
			.with_image("https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&dpr=1&w=500"),
		Member::new(MemberId::new(2), "Lena Novikova", "lenkan@gmail.com")
			.with_permissions(["Administrator"])
			.with_image("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&w=1000&q=80"),
		Member::new(MemberId::new(3), "Maksim Ivanov", "maksiim@gmail.com")
			.with_permissions([Permission::Promotions, Permission::AdModeration, Permission::TechSupport])
			.with_image("https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?cs=srgb&fm=jpg"),
		Member::new(MemberId::new(4), "Aizhuldyz Koshkinbay", "aizhzk@gmail.com")
			.with_permissions([Permission::CustomerRequests])
			.with_image("https://gorodprizrak.com/wp-content/uploads/2021/01/346545.jpg"),
	]
}
